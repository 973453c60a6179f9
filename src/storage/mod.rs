//! 에너지 저장 시스템 효율 보고서. 터빈/저장장치 출력 시계열을 읽어 행별 효율을 붙인다.

pub mod efficiency;
pub mod table;

pub use efficiency::{
    compute_efficiency_report, median_power, system_efficiency, EfficiencyError,
    EfficiencyReport, EfficiencyRow, PowerReading, StorageState, ZeroGapPolicy,
};
pub use table::{
    read_readings, run_report, write_report, ReportColumns, ReportConfig, ReportError,
    ReportSummary, TableRow,
};
