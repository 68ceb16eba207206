// src/utils.rs
use std::cmp::Ordering;

/// Rounds to two decimal places, the precision used for prices and
/// similarity scores.
///
/// The decision is taken on the exact binary value: an exact half goes to
/// the even hundredth (`0.125 -> 0.12`), while a value stored just below a
/// half rounds down (`2.675 -> 2.67`).
#[must_use]
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let (mantissa, shift) = decompose(value.abs());
    if shift <= 0 {
        return value;
    }
    if shift >= 127 {
        return 0.0_f64.copysign(value);
    }

    // |value| * 100 == scaled / 2^shift exactly.
    let scaled = u128::from(mantissa) * 100;
    let whole = scaled >> shift;
    let rest = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let hundredths = match rest.cmp(&half) {
        Ordering::Greater => whole + 1,
        Ordering::Equal => whole + (whole & 1),
        Ordering::Less => whole,
    };

    #[allow(clippy::cast_precision_loss)]
    let rounded = hundredths as f64 / 100.0;
    rounded.copysign(value)
}

/// Splits a non-negative finite float into `mantissa / 2^shift`.
fn decompose(value: f64) -> (u64, i32) {
    let bits = value.to_bits();
    let fraction = bits & ((1u64 << 52) - 1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    if exponent == 0 {
        (fraction, 1074)
    } else {
        (fraction | (1u64 << 52), 1075 - exponent)
    }
}

/// Lowercases and trims user-supplied names so they compare against the
/// canonical vocabulary.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.499_999), 2.5);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(12.0), 12.0);
        assert_eq!(round2(3.25), 3.25);
    }

    #[test]
    fn test_round2_exact_halves_go_to_even() {
        assert_eq!(round2(1.0 / 8.0), 0.12);
        assert_eq!(round2(5.0 / 8.0), 0.62);
        assert_eq!(round2(3.0 / 8.0), 0.38);
        assert_eq!(round2(7.0 / 8.0), 0.88);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_round2_follows_stored_value_near_halves() {
        // 2.675 and 1.005 are stored slightly below the half, 0.005 slightly above.
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.005), 1.0);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(0.015), 0.01);
        assert_eq!(round2(1e-300), 0.0);
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Potato "), "potato");
    }
}
