use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 풍속 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VelocityUnit {
    #[value(name = "m-s")]
    MeterPerSecond,
    #[value(name = "km-h")]
    KilometerPerHour,
    Knot,
}

const MPS_PER_KNOT: f64 = 1852.0 / 3600.0;

pub fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::Knot => value * MPS_PER_KNOT,
    }
}

pub fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value * 3.6,
        VelocityUnit::Knot => value / MPS_PER_KNOT,
    }
}

/// 풍속을 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    from_mps(to_mps(value, from), to)
}
