use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 대기압 단위. 내부 기준은 절대압 Pa이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PressureUnit {
    Pa,
    #[value(name = "hpa")]
    HPa,
    #[value(name = "kpa")]
    KPa,
    Bar,
    Atm,
    #[value(name = "mmhg")]
    MmHg,
}

const PA_PER_ATM: f64 = 101_325.0;
const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_MMHG: f64 = 133.322_387;

/// 주어진 압력을 Pa로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pa => value,
        // hPa == mbar, 기상 관측값에서 주로 쓰인다
        PressureUnit::HPa => value * 100.0,
        PressureUnit::KPa => value * 1000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Atm => value * PA_PER_ATM,
        PressureUnit::MmHg => value * PA_PER_MMHG,
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pa => value_pa,
        PressureUnit::HPa => value_pa / 100.0,
        PressureUnit::KPa => value_pa / 1000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Atm => value_pa / PA_PER_ATM,
        PressureUnit::MmHg => value_pa / PA_PER_MMHG,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_pascal(to_pascal(value, from), to)
}
