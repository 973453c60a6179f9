use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::ConfigError;

/// 기준 터빈(Aerodyn SCD 8.0/168) 출력곡선에서 얻은 풍속별 성능계수.
/// 인덱스가 정수 풍속 [m/s]이며 0~25 m/s 의 26개 값이다.
pub const REFERENCE_COEFFICIENTS: [f64; 26] = [
    0.0, 0.0, 0.0, 0.0, 0.1156, 0.2961, 0.3427, 0.4316, 0.4337, 0.4061, 0.3701, 0.3337, 0.3212,
    0.2695, 0.2158, 0.1754, 0.1446, 0.1205, 0.1015, 0.0863, 0.074, 0.0639, 0.0556, 0.0487, 0.0428,
    0.0379,
];

/// 시동 풍속 [m/s]
pub const CUT_IN_M_PER_S: f64 = 3.0;
/// 정지 풍속 [m/s]
pub const CUT_OUT_M_PER_S: f64 = 25.0;

/// 성능계수 조회 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// `Reject` 정책에서 정수가 아닌 풍속
    #[error("wind speed {0} m/s is not an integer table index")]
    FractionalWindSpeed(f64),
    /// NaN 등 인덱스로 쓸 수 없는 값
    #[error("wind speed {0} cannot be used as a table index")]
    MalformedWindSpeed(f64),
    /// 변환한 인덱스가 테이블 밖
    #[error("wind speed {wind_speed} m/s maps to index {index}, past the {len}-entry table")]
    OutOfRangeLookup {
        wind_speed: f64,
        index: usize,
        len: usize,
    },
}

/// 운전 구간 안의 소수 풍속을 테이블 인덱스로 바꾸는 방법.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LookupPolicy {
    /// 정수가 아니면 오류
    #[default]
    Reject,
    /// 소수부 버림
    Truncate,
    /// 가장 가까운 정수
    Round,
}

/// 풍속 → 성능계수(Cp) 조회 테이블.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbineCurve {
    pub coefficients: Vec<f64>,
    pub cut_in_m_per_s: f64,
    pub cut_out_m_per_s: f64,
    #[serde(default)]
    pub lookup_policy: LookupPolicy,
}

impl Default for TurbineCurve {
    fn default() -> Self {
        Self {
            coefficients: REFERENCE_COEFFICIENTS.to_vec(),
            cut_in_m_per_s: CUT_IN_M_PER_S,
            cut_out_m_per_s: CUT_OUT_M_PER_S,
            lookup_policy: LookupPolicy::Reject,
        }
    }
}

impl TurbineCurve {
    /// 테이블과 컷인/컷아웃을 검증해 곡선을 만든다.
    pub fn new(
        coefficients: Vec<f64>,
        cut_in_m_per_s: f64,
        cut_out_m_per_s: f64,
        lookup_policy: LookupPolicy,
    ) -> Result<Self, ConfigError> {
        let curve = Self {
            coefficients,
            cut_in_m_per_s,
            cut_out_m_per_s,
            lookup_policy,
        };
        curve.validate()?;
        Ok(curve)
    }

    pub fn with_policy(mut self, lookup_policy: LookupPolicy) -> Self {
        self.lookup_policy = lookup_policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cut_in_m_per_s >= 0.0 && self.cut_in_m_per_s <= self.cut_out_m_per_s) {
            return Err(ConfigError::Invalid(format!(
                "cut-in {} m/s must be between 0 and cut-out {} m/s",
                self.cut_in_m_per_s, self.cut_out_m_per_s
            )));
        }
        // 반올림 정책에서도 컷아웃 풍속의 인덱스가 있어야 한다
        let required = self.cut_out_m_per_s.round() as usize + 1;
        if self.coefficients.len() < required {
            return Err(ConfigError::Invalid(format!(
                "coefficient table has {} entries, cut-out {} m/s needs {required}",
                self.coefficients.len(),
                self.cut_out_m_per_s
            )));
        }
        if let Some(bad) = self.coefficients.iter().find(|c| !c.is_finite() || **c < 0.0) {
            return Err(ConfigError::Invalid(format!(
                "coefficient {bad} is not a finite non-negative value"
            )));
        }
        Ok(())
    }

    /// 풍속 [m/s]에 대한 성능계수를 반환한다.
    ///
    /// 컷인 미만 또는 컷아웃 초과이면 0.0 이다. 운전 구간 안에서는 `lookup_policy`에 따라
    /// 정수 인덱스로 바꾼 뒤 테이블을 조회한다.
    pub fn coefficient(&self, wind_speed: f64) -> Result<f64, CurveError> {
        if wind_speed.is_nan() {
            return Err(CurveError::MalformedWindSpeed(wind_speed));
        }
        if wind_speed < self.cut_in_m_per_s || wind_speed > self.cut_out_m_per_s {
            return Ok(0.0);
        }
        let index = match self.lookup_policy {
            LookupPolicy::Reject if wind_speed.fract() != 0.0 => {
                return Err(CurveError::FractionalWindSpeed(wind_speed));
            }
            LookupPolicy::Reject | LookupPolicy::Truncate => wind_speed.trunc(),
            LookupPolicy::Round => wind_speed.round(),
        };
        let index = index as usize;
        let value = self.coefficients.get(index).copied().ok_or(CurveError::OutOfRangeLookup {
            wind_speed,
            index,
            len: self.coefficients.len(),
        })?;
        debug!(wind_speed, index, coefficient = value, "coefficient lookup");
        Ok(value)
    }
}
