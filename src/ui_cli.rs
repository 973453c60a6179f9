use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::air::{AtmosphericSample, DensityMethod};
use crate::i18n::{keys, Translator};
use crate::storage::{ReportSummary, ZeroGapPolicy};
use crate::turbine::{LookupPolicy, TurbineSpec};
use crate::units::{to_kelvin, to_mps, to_pascal, PressureUnit, TemperatureUnit, VelocityUnit};

/// 풍력-에너지저장 설비의 공기밀도, 터빈 출력, 시스템 효율 계산기.
#[derive(Debug, Parser)]
#[command(name = "wind_storage_toolbox", version, about)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 출력 언어 (auto/ko/en)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// 로그 상세도 (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 기압·기온·상대습도로 공기밀도를 계산한다
    Density {
        #[command(flatten)]
        atmosphere: AtmosphereArgs,
        #[arg(long, value_enum, default_value_t = DensityMethod::Exponential)]
        method: DensityMethod,
    },
    /// 풍속에 대한 성능계수(Cp)를 조회한다
    Coefficient {
        #[command(flatten)]
        wind: WindArgs,
        /// 설정 파일의 조회 정책 대신 사용
        #[arg(long, value_enum)]
        policy: Option<LookupPolicy>,
    },
    /// 설정된 터빈 제원과 성능곡선으로 터빈 출력을 계산한다
    Power {
        #[command(flatten)]
        atmosphere: AtmosphereArgs,
        #[command(flatten)]
        wind: WindArgs,
        #[arg(long, value_enum, default_value_t = DensityMethod::Wobus)]
        method: DensityMethod,
    },
    /// 고정 효율 단순식으로 터빈 출력을 계산한다
    SimplePower {
        /// 공기밀도 [kg/m3]
        #[arg(long)]
        density: f64,
        #[command(flatten)]
        wind: WindArgs,
    },
    /// 출력 시계열 CSV에 시스템 효율 열을 붙여 저장한다
    Efficiency {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        /// 기준(중앙값) 터빈 출력 [W]
        #[arg(long)]
        median_power: Option<f64>,
        #[arg(long, value_enum)]
        zero_gap: Option<ZeroGapPolicy>,
    },
    /// 기본 설정 파일을 쓴다
    InitConfig,
}

#[derive(Debug, Clone, Args)]
pub struct AtmosphereArgs {
    /// 대기압
    #[arg(long, allow_negative_numbers = true)]
    pub pressure: f64,
    #[arg(long, value_enum, default_value_t = PressureUnit::Pa)]
    pub pressure_unit: PressureUnit,
    /// 기온
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: f64,
    #[arg(long, value_enum, default_value_t = TemperatureUnit::Kelvin)]
    pub temperature_unit: TemperatureUnit,
    /// 상대습도 (0~1)
    #[arg(long)]
    pub humidity: f64,
}

impl AtmosphereArgs {
    /// 입력 단위를 Pa, K 로 환산한다.
    pub fn to_sample(&self) -> AtmosphericSample {
        AtmosphericSample::new(
            to_pascal(self.pressure, self.pressure_unit),
            to_kelvin(self.temperature, self.temperature_unit),
            self.humidity,
        )
    }
}

#[derive(Debug, Clone, Args)]
pub struct WindArgs {
    /// 풍속
    #[arg(long, allow_negative_numbers = true)]
    pub wind_speed: f64,
    #[arg(long, value_enum, default_value_t = VelocityUnit::MeterPerSecond)]
    pub velocity_unit: VelocityUnit,
}

impl WindArgs {
    pub fn mps(&self) -> f64 {
        to_mps(self.wind_speed, self.velocity_unit)
    }
}

fn method_label(method: DensityMethod) -> &'static str {
    match method {
        DensityMethod::Exponential => "exponential",
        DensityMethod::Wobus => "wobus",
    }
}

pub fn print_density(tr: &Translator, method: DensityMethod, density: f64) {
    println!(
        "{}: {density:.prec$} kg/m3",
        tr.t(keys::DENSITY_RESULT),
        prec = method.digits() as usize
    );
    println!("{}: {}", tr.t(keys::DENSITY_METHOD), method_label(method));
}

pub fn print_coefficient(tr: &Translator, wind_speed: f64, coefficient: f64) {
    println!(
        "{} @ {wind_speed} m/s: {coefficient:.4}",
        tr.t(keys::COEFFICIENT_RESULT)
    );
}

pub fn print_power(tr: &Translator, spec: &TurbineSpec, density: f64, power_w: f64) {
    println!(
        "{}: {} ({} m2)",
        tr.t(keys::POWER_TURBINE),
        spec.model_name,
        spec.swept_area_m2
    );
    println!("{}: {density} kg/m3", tr.t(keys::POWER_DENSITY));
    println!("{}: {power_w:.3} W", tr.t(keys::POWER_RESULT));
}

pub fn print_simple_power(tr: &Translator, power_w: f64) {
    println!("{}: {power_w:.6} W", tr.t(keys::SIMPLE_POWER_RESULT));
}

pub fn print_report_summary(tr: &Translator, summary: &ReportSummary) {
    println!("{}: {}", tr.t(keys::REPORT_ROWS), summary.rows);
    println!(
        "{}: {}",
        tr.t(keys::REPORT_WITH_EFFICIENCY),
        summary.rows_with_efficiency
    );
    if summary.nulled_zero_gap_rows > 0 {
        println!(
            "{}: {}",
            tr.t(keys::REPORT_NULLED),
            summary.nulled_zero_gap_rows
        );
    }
    println!("{}: {} W", tr.t(keys::REPORT_MEDIAN), summary.median_power_w);
    println!(
        "{}: {}",
        tr.t(keys::REPORT_WRITTEN),
        summary.output_path.display()
    );
}
