use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::air::{air_density, DensityError};
use crate::config::{Config, ConfigError};
use crate::i18n::{keys, Translator};
use crate::storage::ReportError;
use crate::turbine::{simplified_turbine_power, CurveError, PowerError, PowerModel};
use crate::ui_cli::{self, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 공기밀도 계산 오류
    #[error(transparent)]
    Density(#[from] DensityError),
    /// 성능곡선 조회 오류
    #[error(transparent)]
    Curve(#[from] CurveError),
    /// 터빈 출력 계산 오류
    #[error(transparent)]
    Power(#[from] PowerError),
    /// 효율 보고서 입출력/계산 오류
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// 하위 명령 하나를 실행한다. 설정은 호출자가 만들어 넘긴다.
pub fn run(
    config: &Config,
    config_path: &Path,
    command: Command,
    tr: &Translator,
) -> Result<(), AppError> {
    debug!(?command, "running command");
    match command {
        Command::Density { atmosphere, method } => {
            let density = air_density(&atmosphere.to_sample(), method, &config.gas)?;
            ui_cli::print_density(tr, method, density);
        }
        Command::Coefficient { wind, policy } => {
            let curve = match policy {
                Some(p) => config.curve.clone().with_policy(p),
                None => config.curve.clone(),
            };
            let speed = wind.mps();
            let coefficient = curve.coefficient(speed)?;
            ui_cli::print_coefficient(tr, speed, coefficient);
        }
        Command::Power {
            atmosphere,
            wind,
            method,
        } => {
            let density = air_density(&atmosphere.to_sample(), method, &config.gas)?;
            let model = PowerModel::new(&config.turbine, &config.curve, &config.gas);
            let power = model.power_from_density(density, wind.mps())?;
            ui_cli::print_power(tr, &config.turbine, density, power);
        }
        Command::SimplePower { density, wind } => {
            let power = simplified_turbine_power(density, wind.mps(), &config.simplified)?;
            ui_cli::print_simple_power(tr, power);
        }
        Command::Efficiency {
            input,
            output,
            median_power,
            zero_gap,
        } => {
            let mut report_cfg = config.report.clone();
            if let Some(path) = input {
                report_cfg.input_path = path;
            }
            if let Some(path) = output {
                report_cfg.output_path = path;
            }
            if median_power.is_some() {
                report_cfg.median_turbine_power_w = median_power;
            }
            if let Some(policy) = zero_gap {
                report_cfg.zero_gap_policy = policy;
            }
            let summary = crate::storage::run_report(&report_cfg)?;
            ui_cli::print_report_summary(tr, &summary);
        }
        Command::InitConfig => {
            Config::default().save_to(config_path)?;
            println!("{}: {}", tr.t(keys::CONFIG_WRITTEN), config_path.display());
        }
    }
    Ok(())
}
