//! 습공기 밀도 두 방식(지수식 / Wobus 다항식) 회귀 테스트.
use proptest::prelude::*;
use wind_storage_toolbox::air::{
    air_density, air_density_exponential, air_density_wobus, wobus_polynomial, AtmosphericSample,
    DensityError, DensityMethod, GasConstants,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {tol})"
    );
}

#[test]
fn exponential_reference_point() {
    let gas = GasConstants::default();
    let sample = AtmosphericSample::new(101_325.0, 288.15, 0.5);
    let rho = air_density_exponential(&sample, &gas).expect("density");
    assert_close("rho", rho, 1.043994, 1e-9);

    // 순수 함수이므로 반복 호출 결과가 같아야 한다
    let again = air_density_exponential(&sample, &gas).expect("density");
    assert_eq!(rho.to_bits(), again.to_bits());
}

#[test]
fn exponential_dry_air_matches_ideal_gas() {
    let gas = GasConstants::default();
    let sample = AtmosphericSample::new(101_325.0, 288.15, 0.0);
    let rho = air_density_exponential(&sample, &gas).expect("density");
    assert_close("rho dry", rho, 1.224978, 1e-9);
}

#[test]
fn wobus_rounds_to_three_digits() {
    let gas = GasConstants::default();
    let cold = air_density_wobus(&AtmosphericSample::new(101_325.0, 288.15, 0.5), &gas)
        .expect("density");
    let warm = air_density_wobus(&AtmosphericSample::new(101_325.0, 298.15, 0.5), &gas)
        .expect("density");
    assert_close("rho 288K", cold, 1.225, 1e-12);
    assert_close("rho 298K", warm, 1.184, 1e-12);
    assert_close("3 digits", (cold * 1000.0).round() / 1000.0, cold, 1e-12);
}

#[test]
fn strategies_diverge_and_dispatch_by_method() {
    let gas = GasConstants::default();
    let sample = AtmosphericSample::new(101_325.0, 288.15, 0.5);
    let a = air_density(&sample, DensityMethod::Exponential, &gas).expect("a");
    let b = air_density(&sample, DensityMethod::Wobus, &gas).expect("b");
    assert_close("dispatch a", a, 1.043994, 1e-9);
    assert_close("dispatch b", b, 1.225, 1e-12);
    assert_eq!(DensityMethod::Exponential.digits(), 6);
    assert_eq!(DensityMethod::Wobus.digits(), 3);
}

#[test]
fn wobus_polynomial_horner_constant_term() {
    assert_close("poly(0)", wobus_polynomial(0.0), 0.99999683, 1e-15);
}

#[test]
fn zero_temperature_is_rejected() {
    let gas = GasConstants::default();
    let sample = AtmosphericSample::new(101_325.0, 0.0, 0.5);
    for method in [DensityMethod::Exponential, DensityMethod::Wobus] {
        let err = air_density(&sample, method, &gas).unwrap_err();
        assert_eq!(err, DensityError::NonPositiveTemperature(0.0));
    }
    let negative = AtmosphericSample::new(101_325.0, -5.0, 0.5);
    assert!(matches!(
        air_density_exponential(&negative, &gas),
        Err(DensityError::NonPositiveTemperature(_))
    ));
}

#[test]
fn non_finite_input_surfaces_as_error() {
    let gas = GasConstants::default();
    let sample = AtmosphericSample::new(f64::NAN, 288.15, 0.5);
    assert!(matches!(
        air_density_exponential(&sample, &gas),
        Err(DensityError::NonFinite { .. })
    ));
    assert!(matches!(
        air_density_wobus(&sample, &gas),
        Err(DensityError::NonFinite { .. })
    ));
}

#[test]
fn humidity_is_not_validated() {
    let gas = GasConstants::default();
    let sample = AtmosphericSample::new(101_325.0, 288.15, 1.5);
    let rho = air_density_exponential(&sample, &gas).expect("out-of-range humidity still computes");
    assert!(rho < 1.043994);
}

proptest! {
    #[test]
    fn both_strategies_decrease_with_temperature(
        pressure in 90_000.0f64..105_000.0,
        temperature in 250.0f64..330.0,
        delta in 0.5f64..20.0,
        humidity in 0.0f64..=1.0,
    ) {
        let gas = GasConstants::default();
        let low = AtmosphericSample::new(pressure, temperature, humidity);
        let high = AtmosphericSample::new(pressure, temperature + delta, humidity);
        for method in [DensityMethod::Exponential, DensityMethod::Wobus] {
            let rho_low = air_density(&low, method, &gas).unwrap();
            let rho_high = air_density(&high, method, &gas).unwrap();
            prop_assert!(rho_low >= rho_high, "{method:?}: {rho_low} < {rho_high}");
        }
    }
}
