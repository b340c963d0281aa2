//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Round a f64 and clamp it to the i64 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).round();
    cast::<f64, i64>(clamped).unwrap_or(0)
}

/// Convert a decimal currency amount (e.g. `12.5`) to whole cents.
#[must_use]
pub fn amount_to_cents(amount: f64) -> i64 {
    round_f64_to_i64(amount * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_handles_non_finite() {
        assert_eq!(round_f64_to_i64(f64::NAN), 0);
        assert_eq!(round_f64_to_i64(f64::INFINITY), 0);
        assert_eq!(round_f64_to_i64(2.5), 3);
        assert_eq!(round_f64_to_i64(-2.4), -2);
    }

    #[test]
    fn cents_round_trip_at_two_decimals() {
        assert_eq!(amount_to_cents(45.0), 4500);
        assert_eq!(amount_to_cents(0.1 + 0.2), 30);
        assert_eq!(amount_to_cents(-0.004), 0);
    }
}
