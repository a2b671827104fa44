//! Numeric input parsing and conversion helpers centralizing safe casts.

use num_traits::cast::cast;

/// Parse raw text from a numeric input field into an integer.
///
/// Returns `None` for anything that is not a plain base-10 integer, matching
/// the silent-ignore policy for malformed input. Values outside the `i32`
/// range are treated as malformed rather than saturated.
#[must_use]
pub fn parse_int_input(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

/// Parse raw text from a numeric input field into a finite float.
///
/// Returns `None` for unparseable text and for NaN/infinite values, so a
/// malformed weigh-in or sleep entry never reaches game state.
#[must_use]
pub fn parse_float_input(raw: &str) -> Option<f32> {
    let value = raw.trim().parse::<f32>().ok()?;
    value.is_finite().then_some(value)
}

/// Round a f32 up to the next whole number and clamp it into the u32 range,
/// returning 0 for NaN or negative values.
#[must_use]
pub fn ceil_f32_to_u32(value: f32) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let max = cast::<u32, f32>(u32::MAX).unwrap_or(f32::MAX);
    let clamped = value.min(max).ceil();
    cast::<f32, u32>(clamped).unwrap_or(0)
}

/// Clamp a ratio expressed as a percentage into 0..=100, mapping non-finite
/// values to 0.
#[must_use]
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_input_accepts_plain_integers() {
        assert_eq!(parse_int_input("42"), Some(42));
        assert_eq!(parse_int_input("  -3 "), Some(-3));
        assert_eq!(parse_int_input("abc"), None);
        assert_eq!(parse_int_input(""), None);
        assert_eq!(parse_int_input("4.5"), None);
    }

    #[test]
    fn float_input_rejects_non_finite() {
        assert_eq!(parse_float_input("7.5"), Some(7.5));
        assert_eq!(parse_float_input("NaN"), None);
        assert_eq!(parse_float_input("inf"), None);
        assert_eq!(parse_float_input("abc"), None);
    }

    #[test]
    fn ceil_handles_edges() {
        assert_eq!(ceil_f32_to_u32(14.2), 15);
        assert_eq!(ceil_f32_to_u32(15.0), 15);
        assert_eq!(ceil_f32_to_u32(0.0), 0);
        assert_eq!(ceil_f32_to_u32(-4.0), 0);
        assert_eq!(ceil_f32_to_u32(f32::NAN), 0);
    }

    #[test]
    fn percent_clamps_range() {
        assert!((clamp_percent(55.5) - 55.5).abs() <= f32::EPSILON);
        assert!((clamp_percent(120.0) - 100.0).abs() <= f32::EPSILON);
        assert!(clamp_percent(-3.0).abs() <= f32::EPSILON);
        assert!(clamp_percent(f32::NAN).abs() <= f32::EPSILON);
    }
}
