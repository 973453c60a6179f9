use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::air::GasConstants;
use crate::storage::ReportConfig;
use crate::turbine::{SimplifiedModel, TurbineCurve, TurbineSpec};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 물리 상수와 터빈 곡선도 여기서 주입한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드 (auto/ko/en)
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub turbine: TurbineSpec,
    #[serde(default)]
    pub curve: TurbineCurve,
    #[serde(default)]
    pub gas: GasConstants,
    #[serde(default)]
    pub simplified: SimplifiedModel,
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_language() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            turbine: TurbineSpec::default(),
            curve: TurbineCurve::default(),
            gas: GasConstants::default(),
            simplified: SimplifiedModel::default(),
            report: ReportConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file I/O: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값은 읽혔으나 물리적으로 쓸 수 없음
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    /// 터빈 제원, 곡선, 상수 값을 검증한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.turbine.validate()?;
        self.curve.validate()?;
        if !(self.gas.dry_air_gas_constant > 0.0 && self.gas.water_vapour_gas_constant > 0.0) {
            return Err(ConfigError::Invalid(
                "gas constants must be positive".to_string(),
            ));
        }
        if !(self.simplified.swept_area_m2 > 0.0 && self.simplified.efficiency.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "simplified model needs a positive swept area and finite efficiency, got {} m2 / {}",
                self.simplified.swept_area_m2, self.simplified.efficiency
            )));
        }
        if let Some(median) = self.report.median_turbine_power_w {
            if !median.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "median turbine power {median} W is not finite"
                )));
            }
        }
        Ok(())
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// 지정한 TOML 파일을 읽어 검증한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    cfg.validate()?;
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}
