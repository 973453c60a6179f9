use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::storage::efficiency::{
    compute_efficiency_report, median_power, EfficiencyError, EfficiencyReport, PowerReading,
    StorageState, ZeroGapPolicy,
};

/// 표 입출력 오류. 어느 경우든 배치 전체가 실패한다.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column '{0}' not found in header")]
    MissingColumn(String),
    #[error("line {line}: column '{column}' value '{value}' is not a number")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },
    #[error("{0}")]
    Efficiency(#[from] EfficiencyError),
    #[error("{rows} input rows but {results} efficiency results")]
    RowCountMismatch { rows: usize, results: usize },
}

/// 입력/출력 열 이름. 위치가 아니라 이름으로 찾는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportColumns {
    pub turbine_power: String,
    pub storage_power: String,
    pub state: String,
    pub efficiency: String,
}

impl Default for ReportColumns {
    fn default() -> Self {
        Self {
            turbine_power: "TURBINE POWER".to_string(),
            storage_power: "STORAGE POWER".to_string(),
            state: "STATE".to_string(),
            efficiency: "SYSTEM EFFICIENCY".to_string(),
        }
    }
}

/// 효율 보고서 배치 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// 기준(중앙값) 터빈 출력 [W]. 없으면 입력 데이터의 중앙값을 쓴다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_turbine_power_w: Option<f64>,
    #[serde(default)]
    pub zero_gap_policy: ZeroGapPolicy,
    #[serde(default)]
    pub columns: ReportColumns,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("out.csv"),
            output_path: PathBuf::from("eff.csv"),
            median_turbine_power_w: None,
            zero_gap_policy: ZeroGapPolicy::Fail,
            columns: ReportColumns::default(),
        }
    }
}

/// 읽어 들인 한 행. 출력 시 입력 문자열을 그대로 다시 쓰기 위해 원문을 보관한다.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 터빈 출력, 저장 출력, 상태 순의 원문
    pub raw: [String; 3],
    pub reading: PowerReading,
}

/// 배치 실행 요약.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub rows: usize,
    pub rows_with_efficiency: usize,
    pub nulled_zero_gap_rows: usize,
    pub median_power_w: f64,
    pub output_path: PathBuf,
}

struct ColumnIndex {
    turbine_power: usize,
    storage_power: usize,
    state: usize,
}

fn normalize_header(name: &str) -> &str {
    // 엑셀 UTF-8 CSV의 BOM
    name.trim().trim_start_matches('\u{feff}')
}

fn locate_columns(
    headers: &StringRecord,
    columns: &ReportColumns,
) -> Result<ColumnIndex, ReportError> {
    let find = |wanted: &str| {
        headers
            .iter()
            .position(|h| normalize_header(h) == wanted)
            .ok_or_else(|| ReportError::MissingColumn(wanted.to_string()))
    };
    Ok(ColumnIndex {
        turbine_power: find(&columns.turbine_power)?,
        storage_power: find(&columns.storage_power)?,
        state: find(&columns.state)?,
    })
}

fn parse_number(raw: &str, line: u64, column: &str) -> Result<f64, ReportError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        // "NaN", "inf" 도 f64 로는 읽히지만 출력 값으로는 쓸 수 없다
        _ => Err(ReportError::InvalidNumber {
            line,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// CSV에서 필요한 세 열을 이름으로 읽는다. 다른 열은 무시한다.
pub fn read_readings<R: Read>(
    reader: R,
    columns: &ReportColumns,
) -> Result<Vec<TableRow>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let index = locate_columns(&headers, columns)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        // 헤더가 1행이므로 데이터는 2행부터
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);
        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        let raw = [
            field(index.turbine_power),
            field(index.storage_power),
            field(index.state),
        ];
        let reading = PowerReading {
            turbine_power_w: parse_number(&raw[0], line, &columns.turbine_power)?,
            storage_power_w: parse_number(&raw[1], line, &columns.storage_power)?,
            state: StorageState::parse(&raw[2]),
        };
        rows.push(TableRow { raw, reading });
    }
    debug!(rows = rows.len(), "power readings loaded");
    Ok(rows)
}

/// 입력 세 열과 효율 열을 CSV로 쓴다. 효율이 없으면 빈 칸이다.
pub fn write_report<W: Write>(
    writer: W,
    columns: &ReportColumns,
    rows: &[TableRow],
    report: &EfficiencyReport,
) -> Result<(), ReportError> {
    if rows.len() != report.rows.len() {
        return Err(ReportError::RowCountMismatch {
            rows: rows.len(),
            results: report.rows.len(),
        });
    }
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record([
        columns.turbine_power.as_str(),
        columns.storage_power.as_str(),
        columns.state.as_str(),
        columns.efficiency.as_str(),
    ])?;
    for (row, result) in rows.iter().zip(&report.rows) {
        let efficiency = result
            .efficiency_pct
            .map(|v| format!("{v:?}"))
            .unwrap_or_default();
        writer.write_record([
            row.raw[0].as_str(),
            row.raw[1].as_str(),
            row.raw[2].as_str(),
            efficiency.as_str(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// 읽기 → 기준 출력 결정 → 효율 계산 → 쓰기를 한 번에 수행한다.
pub fn run_report(config: &ReportConfig) -> Result<ReportSummary, ReportError> {
    let input = File::open(&config.input_path).map_err(|e| io_error(&config.input_path, e))?;
    let rows = read_readings(input, &config.columns)?;
    let readings: Vec<PowerReading> = rows.iter().map(|r| r.reading.clone()).collect();

    let median_power_w = match config.median_turbine_power_w {
        Some(value) => value,
        None => {
            let value = median_power(&readings)?;
            info!(median_power_w = value, "median reference derived from input");
            value
        }
    };

    let report = compute_efficiency_report(readings, median_power_w, config.zero_gap_policy)?;
    let output =
        File::create(&config.output_path).map_err(|e| io_error(&config.output_path, e))?;
    write_report(output, &config.columns, &rows, &report)?;
    info!(path = %config.output_path.display(), "efficiency report written");

    Ok(ReportSummary {
        rows: report.rows.len(),
        rows_with_efficiency: report.rows_with_efficiency(),
        nulled_zero_gap_rows: report.nulled_rows.len(),
        median_power_w,
        output_path: config.output_path.clone(),
    })
}

fn io_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.to_path_buf(),
        source,
    }
}
