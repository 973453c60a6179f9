//! 풍력-에너지저장 설비의 물리량 계산 로직을 라이브러리로 분리해 CLI와 테스트에서 함께 쓴다.
//!
//! - `air`: 기상 입력 → 습공기 밀도 (지수식 / Wobus 다항식)
//! - `turbine`: 터빈 제원, 풍속별 성능계수 곡선, 출력 모델
//! - `storage`: 출력 시계열 CSV → 시스템 효율 보고서

pub mod air;
pub mod app;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod rounding;
pub mod storage;
pub mod turbine;
pub mod ui_cli;
pub mod units;
