//! 성능곡선 조회와 터빈 출력 모델 테스트.
use proptest::prelude::*;
use wind_storage_toolbox::air::{AtmosphericSample, DensityMethod, GasConstants};
use wind_storage_toolbox::turbine::{
    available_wind_power, simplified_turbine_power, CurveError, LookupPolicy, PowerError,
    PowerModel, SimplifiedModel, TurbineCurve, TurbineSpec,
};
use wind_storage_toolbox::turbine::curve::REFERENCE_COEFFICIENTS;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.3e}, tol {tol})"
    );
}

#[test]
fn coefficient_cutoffs_and_table_edges() {
    let curve = TurbineCurve::default();
    assert_eq!(curve.coefficient(2.0).unwrap(), 0.0);
    assert_eq!(curve.coefficient(3.0).unwrap(), 0.0);
    assert_eq!(curve.coefficient(4.0).unwrap(), 0.1156);
    assert_eq!(curve.coefficient(8.0).unwrap(), 0.4337);
    assert_eq!(curve.coefficient(25.0).unwrap(), 0.0379);
    assert_eq!(curve.coefficient(26.0).unwrap(), 0.0);
    assert_eq!(curve.coefficient(-4.0).unwrap(), 0.0);
}

#[test]
fn fractional_speed_follows_policy() {
    let curve = TurbineCurve::default();
    assert_eq!(
        curve.coefficient(7.6),
        Err(CurveError::FractionalWindSpeed(7.6))
    );
    // 운전 구간 밖의 소수 풍속은 정책과 무관하게 0
    assert_eq!(curve.coefficient(2.5).unwrap(), 0.0);
    assert_eq!(curve.coefficient(25.5).unwrap(), 0.0);

    let truncate = curve.clone().with_policy(LookupPolicy::Truncate);
    assert_eq!(truncate.coefficient(7.6).unwrap(), 0.4316);
    let round = curve.with_policy(LookupPolicy::Round);
    assert_eq!(round.coefficient(7.6).unwrap(), 0.4337);
    assert_eq!(round.coefficient(24.6).unwrap(), 0.0379);
}

#[test]
fn nan_speed_is_malformed() {
    let curve = TurbineCurve::default();
    assert!(matches!(
        curve.coefficient(f64::NAN),
        Err(CurveError::MalformedWindSpeed(_))
    ));
}

#[test]
fn short_table_is_rejected() {
    let err = TurbineCurve::new(vec![0.1; 10], 3.0, 25.0, LookupPolicy::Reject);
    assert!(err.is_err());
    let err = TurbineSpec::new("tiny", 10.0, 0.0);
    assert!(err.is_err());
}

#[test]
fn rounded_index_past_table_is_an_error() {
    // 컷아웃 25.6 에서 25.5 를 반올림하면 26번 인덱스가 필요하다
    let fractional_cut_out = TurbineCurve::new(
        REFERENCE_COEFFICIENTS.to_vec(),
        3.0,
        25.6,
        LookupPolicy::Round,
    );
    assert!(fractional_cut_out.is_err());

    let mut curve = TurbineCurve::default().with_policy(LookupPolicy::Round);
    curve.cut_out_m_per_s = 25.6;
    assert_eq!(
        curve.coefficient(25.5),
        Err(CurveError::OutOfRangeLookup {
            wind_speed: 25.5,
            index: 26,
            len: 26,
        })
    );
    assert_eq!(curve.coefficient(25.4).unwrap(), 0.0379);
}

#[test]
fn available_power_shared_expression() {
    assert_close(
        "available",
        available_wind_power(1.225, 10.0, 21_900.0),
        13_413_750.0,
        1e-6,
    );
}

#[test]
fn detailed_power_uses_curve_and_swept_area() {
    let spec = TurbineSpec::default();
    let curve = TurbineCurve::default();
    let gas = GasConstants::default();
    let model = PowerModel::new(&spec, &curve, &gas);

    assert_close(
        "10 m/s",
        model.power_from_density(1.225, 10.0).unwrap(),
        4_964_428.875,
        1e-6,
    );
    assert_close(
        "25 m/s",
        model.power_from_density(1.225, 25.0).unwrap(),
        7_943_455.078,
        1e-3,
    );
    assert_eq!(model.power_from_density(1.225, 3.0).unwrap(), 0.0);

    let sample = AtmosphericSample::new(101_325.0, 288.15, 0.5);
    let wobus = model.power(&sample, 10.0, DensityMethod::Wobus).unwrap();
    assert_close("wobus path", wobus, 4_964_428.875, 1e-6);
    let exponential = model
        .power(&sample, 10.0, DensityMethod::Exponential)
        .unwrap();
    assert_close("exponential path", exponential, 4_230_884.864, 1e-3);
}

#[test]
fn detailed_power_rounds_decimal_halves_to_stored_value() {
    let spec = TurbineSpec::default();
    let curve = TurbineCurve::default();
    let gas = GasConstants::default();
    let model = PowerModel::new(&spec, &curve, &gas);

    // 곱셈 결과가 소수 넷째 자리 5 로 끝나는 조합
    assert_eq!(model.power_from_density(1.25, 15.0).unwrap(), 8_102_657.812);
    assert_eq!(model.power_from_density(1.1, 17.0).unwrap(), 7_130_838.742);
    assert_eq!(model.power_from_density(1.1, 21.0).unwrap(), 7_127_964.805);
}

#[test]
fn detailed_power_scales_with_configured_swept_area() {
    let spec = TurbineSpec::new("half rotor", 120.0, 10_950.0).unwrap();
    let curve = TurbineCurve::default();
    let gas = GasConstants::default();
    let model = PowerModel::new(&spec, &curve, &gas);
    assert_close(
        "half area",
        model.power_from_density(1.225, 10.0).unwrap(),
        4_964_428.875 / 2.0,
        1e-3,
    );
}

#[test]
fn detailed_power_propagates_lookup_and_density_errors() {
    let spec = TurbineSpec::default();
    let curve = TurbineCurve::default();
    let gas = GasConstants::default();
    let model = PowerModel::new(&spec, &curve, &gas);
    assert!(matches!(
        model.power_from_density(1.225, 9.5),
        Err(PowerError::Curve(_))
    ));
    let frozen = AtmosphericSample::new(101_325.0, 0.0, 0.5);
    assert!(matches!(
        model.power(&frozen, 10.0, DensityMethod::Wobus),
        Err(PowerError::Density(_))
    ));
}

#[test]
fn simplified_power_ignores_turbine_spec() {
    let model = SimplifiedModel::default();
    assert_close(
        "simplified",
        simplified_turbine_power(1.225, 10.0, &model).unwrap(),
        4_024_125.0,
        1e-6,
    );
    // 성능곡선을 쓰지 않으므로 컷아웃 밖에서도 출력이 있다
    assert!(simplified_turbine_power(1.225, 30.0, &model).unwrap() > 0.0);
}

proptest! {
    #[test]
    fn coefficient_is_zero_outside_operating_range(
        speed in prop_oneof![-100.0f64..3.0, 25.000_001f64..1_000.0],
    ) {
        let curve = TurbineCurve::default();
        prop_assert_eq!(curve.coefficient(speed).unwrap(), 0.0);
    }

    #[test]
    fn detailed_power_is_zero_outside_operating_range(
        speed in prop_oneof![-100.0f64..3.0, 25.000_001f64..1_000.0],
        density in -10.0f64..10.0,
    ) {
        let spec = TurbineSpec::default();
        let curve = TurbineCurve::default();
        let gas = GasConstants::default();
        let model = PowerModel::new(&spec, &curve, &gas);
        prop_assert_eq!(model.power_from_density(density, speed).unwrap(), 0.0);
    }
}
