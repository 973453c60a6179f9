//! 단위 정의 및 변환 모듈 모음. 계산식은 Pa, K, m/s 만 받으므로 입력 경계에서 환산한다.

pub mod pressure;
pub mod temperature;
pub mod velocity;

pub use pressure::{convert_pressure, to_pascal, PressureUnit};
pub use temperature::{convert_temperature, to_kelvin, TemperatureUnit};
pub use velocity::{convert_velocity, to_mps, VelocityUnit};
