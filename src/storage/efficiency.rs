use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// 시스템 효율 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EfficiencyError {
    /// 충·방전 중 기준 출력과 터빈 출력이 같아 분모가 0
    #[error("row {row}: turbine power equals the median reference ({median_power_w} W)")]
    ZeroPowerGap { row: usize, median_power_w: f64 },
    /// 기준 출력을 구할 행이 없음
    #[error("no turbine power readings to derive a median reference from")]
    EmptyInput,
    /// 기준 출력이 NaN 또는 무한대
    #[error("median reference power {0} W is not finite")]
    NonFiniteMedian(f64),
    /// 입력값이나 계산된 효율이 NaN 또는 무한대
    #[error("row {row}: non-finite value {value} in efficiency calculation")]
    NonFinite { row: usize, value: f64 },
}

/// 저장장치 운전 상태.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageState {
    Charging,
    Discharging,
    Idle,
    /// 그 밖의 상태. 효율 계산 대상이 아니다.
    Other(String),
}

impl StorageState {
    /// 입력 파일의 STATE 문자열을 해석한다. 대소문자를 구분한다.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "CHARGING" => StorageState::Charging,
            "DISCHARGING" => StorageState::Discharging,
            "IDLE" => StorageState::Idle,
            other => StorageState::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StorageState::Charging => "CHARGING",
            StorageState::Discharging => "DISCHARGING",
            StorageState::Idle => "IDLE",
            StorageState::Other(s) => s,
        }
    }

    /// 충전 또는 방전 중인지 여부.
    pub fn is_active(&self) -> bool {
        matches!(self, StorageState::Charging | StorageState::Discharging)
    }
}

/// 시계열 한 행.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerReading {
    /// 터빈 출력 [W]
    pub turbine_power_w: f64,
    /// 저장장치 출력 [W] (방전 시 부호가 바뀔 수 있어 절대값을 쓴다)
    pub storage_power_w: f64,
    pub state: StorageState,
}

/// 입력 행과 같은 위치에 붙는 효율 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyRow {
    pub reading: PowerReading,
    /// 시스템 효율 [%]. 충·방전이 아니거나 `Null` 정책으로 비운 경우 None.
    pub efficiency_pct: Option<f64>,
}

/// 충·방전 중 분모가 0인 행을 처리하는 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ZeroGapPolicy {
    /// 배치 전체를 오류로 중단
    #[default]
    Fail,
    /// 해당 행만 빈 값으로 두고 경고를 남김
    Null,
}

/// 효율 계산 결과 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct EfficiencyReport {
    pub rows: Vec<EfficiencyRow>,
    pub median_power_w: f64,
    /// `Null` 정책으로 비운 행 번호(0부터)
    pub nulled_rows: Vec<usize>,
}

impl EfficiencyReport {
    pub fn rows_with_efficiency(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.efficiency_pct.is_some())
            .count()
    }
}

/// 효율 [%] = |저장 출력| / |기준 출력 - 터빈 출력| × 100
///
/// 충·방전 상태가 아니면 `Ok(None)`. 분모가 0이면 `ZeroPowerGap`, 유한하지 않은 값이
/// 끼면 `NonFinite`/`NonFiniteMedian` 오류다. `row`는 오류 메시지에만 쓰인다.
pub fn system_efficiency(
    reading: &PowerReading,
    median_power_w: f64,
    row: usize,
) -> Result<Option<f64>, EfficiencyError> {
    if !reading.state.is_active() {
        return Ok(None);
    }
    if !median_power_w.is_finite() {
        return Err(EfficiencyError::NonFiniteMedian(median_power_w));
    }
    for value in [reading.turbine_power_w, reading.storage_power_w] {
        if !value.is_finite() {
            return Err(EfficiencyError::NonFinite { row, value });
        }
    }
    let gap = (median_power_w - reading.turbine_power_w).abs();
    if gap == 0.0 {
        return Err(EfficiencyError::ZeroPowerGap {
            row,
            median_power_w,
        });
    }
    let efficiency = reading.storage_power_w.abs() / gap * 100.0;
    if !efficiency.is_finite() {
        return Err(EfficiencyError::NonFinite {
            row,
            value: efficiency,
        });
    }
    Ok(Some(efficiency))
}

/// 모든 행에 효율을 붙인다. 출력 순서는 입력 순서와 같다.
pub fn compute_efficiency_report(
    readings: Vec<PowerReading>,
    median_power_w: f64,
    policy: ZeroGapPolicy,
) -> Result<EfficiencyReport, EfficiencyError> {
    if !median_power_w.is_finite() {
        return Err(EfficiencyError::NonFiniteMedian(median_power_w));
    }
    let mut rows = Vec::with_capacity(readings.len());
    let mut nulled_rows = Vec::new();
    for (idx, reading) in readings.into_iter().enumerate() {
        let efficiency_pct = match system_efficiency(&reading, median_power_w, idx) {
            Ok(value) => value,
            Err(EfficiencyError::ZeroPowerGap { .. }) if policy == ZeroGapPolicy::Null => {
                warn!(row = idx, median_power_w, "zero power gap, efficiency left empty");
                nulled_rows.push(idx);
                None
            }
            Err(e) => return Err(e),
        };
        rows.push(EfficiencyRow {
            reading,
            efficiency_pct,
        });
    }
    let report = EfficiencyReport {
        rows,
        median_power_w,
        nulled_rows,
    };
    info!(
        rows = report.rows.len(),
        with_efficiency = report.rows_with_efficiency(),
        nulled = report.nulled_rows.len(),
        "system efficiency computed"
    );
    Ok(report)
}

/// 터빈 출력의 중앙값 [W]. 짝수 개이면 가운데 두 값의 평균.
pub fn median_power(readings: &[PowerReading]) -> Result<f64, EfficiencyError> {
    let mut powers: Vec<f64> = readings.iter().map(|r| r.turbine_power_w).collect();
    if powers.is_empty() {
        return Err(EfficiencyError::EmptyInput);
    }
    powers.sort_by(|a, b| a.total_cmp(b));
    let mid = powers.len() / 2;
    let median = if powers.len() % 2 == 0 {
        (powers[mid - 1] + powers[mid]) / 2.0
    } else {
        powers[mid]
    };
    Ok(median)
}
