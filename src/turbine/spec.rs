use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// 풍력터빈 제원. 프로세스 시작 시 한 번 만들고 계산 함수에 참조로 넘긴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbineSpec {
    /// 모델명
    pub model_name: String,
    /// 허브 높이 [m]
    pub hub_height_m: f64,
    /// 로터 회전 면적 [m2]
    pub swept_area_m2: f64,
}

impl Default for TurbineSpec {
    fn default() -> Self {
        Self {
            model_name: "SG 8.0-167 DD".to_string(),
            hub_height_m: 167.0,
            swept_area_m2: 21_900.0,
        }
    }
}

impl TurbineSpec {
    pub fn new(
        model_name: impl Into<String>,
        hub_height_m: f64,
        swept_area_m2: f64,
    ) -> Result<Self, ConfigError> {
        let spec = Self {
            model_name: model_name.into(),
            hub_height_m,
            swept_area_m2,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// 회전 면적은 양수여야 한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.swept_area_m2.is_finite() && self.swept_area_m2 > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "turbine swept area must be positive, got {}",
                self.swept_area_m2
            )));
        }
        if !(self.hub_height_m.is_finite() && self.hub_height_m >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "turbine hub height must be non-negative, got {}",
                self.hub_height_m
            )));
        }
        Ok(())
    }
}
