//! 풍력터빈 제원, 성능곡선, 출력 모델.

pub mod curve;
pub mod power;
pub mod spec;

pub use curve::{CurveError, LookupPolicy, TurbineCurve};
pub use power::{
    available_wind_power, simplified_turbine_power, PowerError, PowerModel, SimplifiedModel,
};
pub use spec::TurbineSpec;
