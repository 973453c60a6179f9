use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::air::{air_density, AtmosphericSample, DensityError, DensityMethod, GasConstants};
use crate::rounding::round_to;
use crate::turbine::curve::{CurveError, TurbineCurve};
use crate::turbine::spec::TurbineSpec;

/// 상세식(성능곡선 적용) 결과의 반올림 자릿수.
pub const DETAILED_DIGITS: u32 = 3;
/// 단순식(고정 효율) 결과의 반올림 자릿수.
pub const SIMPLIFIED_DIGITS: u32 = 6;

/// 터빈 출력 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PowerError {
    #[error("air density: {0}")]
    Density(#[from] DensityError),
    #[error("turbine curve: {0}")]
    Curve(#[from] CurveError),
    #[error("turbine power is not finite ({0})")]
    NonFinite(f64),
}

/// 바람이 가진 가용 동력 [W] = 0.5 · ρ · v³ · A
pub fn available_wind_power(air_density: f64, wind_speed: f64, swept_area_m2: f64) -> f64 {
    0.5 * air_density * wind_speed.powi(3) * swept_area_m2
}

/// 고정 효율 단순 모델 설정. 회전 면적은 터빈 제원과 무관하게 자체 값을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedModel {
    /// 가정 효율 (실측 곡선이 없을 때 사용)
    pub efficiency: f64,
    /// 회전 면적 [m2]
    pub swept_area_m2: f64,
}

impl Default for SimplifiedModel {
    fn default() -> Self {
        Self {
            efficiency: 0.3,
            swept_area_m2: 21_900.0,
        }
    }
}

/// 단순식: 효율 × 가용 동력, 소수 6자리 반올림.
pub fn simplified_turbine_power(
    air_density: f64,
    wind_speed: f64,
    model: &SimplifiedModel,
) -> Result<f64, PowerError> {
    let available = available_wind_power(air_density, wind_speed, model.swept_area_m2);
    let power = model.efficiency * available;
    checked(round_to(power, SIMPLIFIED_DIGITS))
}

/// 터빈 제원과 성능곡선을 묶은 상세 출력 모델.
#[derive(Debug, Clone, Copy)]
pub struct PowerModel<'a> {
    pub spec: &'a TurbineSpec,
    pub curve: &'a TurbineCurve,
    pub gas: &'a GasConstants,
}

impl<'a> PowerModel<'a> {
    pub fn new(spec: &'a TurbineSpec, curve: &'a TurbineCurve, gas: &'a GasConstants) -> Self {
        Self { spec, curve, gas }
    }

    /// 기상 입력으로 공기밀도를 구한 뒤 상세식으로 출력 [W]을 계산한다.
    pub fn power(
        &self,
        sample: &AtmosphericSample,
        wind_speed: f64,
        method: DensityMethod,
    ) -> Result<f64, PowerError> {
        let density = air_density(sample, method, self.gas)?;
        self.power_from_density(density, wind_speed)
    }

    /// 상세식: Cp(v) × 가용 동력, 소수 3자리 반올림.
    pub fn power_from_density(
        &self,
        air_density: f64,
        wind_speed: f64,
    ) -> Result<f64, PowerError> {
        let cp = self.curve.coefficient(wind_speed)?;
        if cp == 0.0 {
            return Ok(0.0);
        }
        let available = available_wind_power(air_density, wind_speed, self.spec.swept_area_m2);
        checked(round_to(cp * available, DETAILED_DIGITS))
    }
}

fn checked(power: f64) -> Result<f64, PowerError> {
    if power.is_finite() {
        Ok(power)
    } else {
        Err(PowerError::NonFinite(power))
    }
}
