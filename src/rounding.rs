/// 소수점 `digits` 자리로 반올림한다.
///
/// 배율을 곱한 뒤 `f64::round` 하면 곱셈 오차로 .5 경계가 새로 생겨 위로 올라간다. 대신
/// 저장된 이진값 그대로를 10진 `digits` 자리로 서식화한다. 정확한 동률이면 짝수 쪽을 택한다.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.prec$}", prec = digits as usize)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_to_requested_digits() {
        assert_eq!(round_to(1.2249781262, 3), 1.225);
        assert_eq!(round_to(1.0439936321, 6), 1.043994);
        assert_eq!(round_to(-0.0004, 3), -0.0);
    }

    #[test]
    fn decimal_halves_follow_the_stored_binary_value() {
        // 1.2345 와 2.675 는 이진수로 경계보다 약간 작다
        assert_eq!(round_to(1.2345, 3), 1.234);
        assert_eq!(round_to(2.675, 2), 2.67);
        // 0.125 는 정확한 동률이라 짝수 쪽
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(8_102_657.8125, 3), 8_102_657.812);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_to(f64::NAN, 3).is_nan());
        assert_eq!(round_to(f64::INFINITY, 3), f64::INFINITY);
    }
}
