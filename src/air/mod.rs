//! 대기 상태량 계산 모듈. 기압·기온·상대습도로부터 습공기 밀도를 구한다.

pub mod density;

pub use density::*;
