//! 입력 경계 단위 환산 테스트.
use wind_storage_toolbox::units::{
    convert_pressure, convert_temperature, convert_velocity, to_kelvin, to_mps, to_pascal,
    PressureUnit, TemperatureUnit, VelocityUnit,
};

#[test]
fn meteorological_pressure_to_pascal() {
    assert!((to_pascal(1013.25, PressureUnit::HPa) - 101_325.0).abs() < 1e-9);
    assert!((to_pascal(1.0, PressureUnit::Atm) - 101_325.0).abs() < 1e-9);
    assert!((to_pascal(760.0, PressureUnit::MmHg) - 101_325.0).abs() < 1.0);
    assert!((convert_pressure(1.0, PressureUnit::Bar, PressureUnit::KPa) - 100.0).abs() < 1e-9);
}

#[test]
fn celsius_and_fahrenheit_to_kelvin() {
    assert!((to_kelvin(15.0, TemperatureUnit::Celsius) - 288.15).abs() < 1e-9);
    assert!((to_kelvin(59.0, TemperatureUnit::Fahrenheit) - 288.15).abs() < 1e-9);
    let back = convert_temperature(288.15, TemperatureUnit::Kelvin, TemperatureUnit::Celsius);
    assert!((back - 15.0).abs() < 1e-9);
}

#[test]
fn wind_speed_units() {
    assert!((to_mps(36.0, VelocityUnit::KilometerPerHour) - 10.0).abs() < 1e-9);
    assert!((to_mps(1.0, VelocityUnit::Knot) - 0.514_444).abs() < 1e-6);
    let knots = convert_velocity(10.0, VelocityUnit::MeterPerSecond, VelocityUnit::Knot);
    assert!((knots - 19.438_445).abs() < 1e-5);
}
