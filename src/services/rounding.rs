/// Rounds to the nearest integer, ties toward positive infinity.
///
/// Every derived figure in the projection goes through this function, so
/// `-2.5` rounds to `-2` and `2.5` rounds to `3`. Non-finite input is
/// returned unchanged.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds to two decimals using [`round_half_up`].
pub fn round_to_cents(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
    }

    #[test]
    fn rounds_to_nearest_otherwise() {
        assert_eq!(round_half_up(4012.8), 4013.0);
        assert_eq!(round_half_up(1404.48), 1404.0);
        assert_eq!(round_half_up(-3.6), -4.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
    }

    #[test]
    fn nan_stays_nan() {
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round_to_cents(26.35), 26.35);
        assert_eq!(round_to_cents(22.0), 22.0);
        assert_eq!(round_to_cents(1.005), 1.0);
    }
}
