//! Helpers for the `f32` undefined sentinel.
//!
//! Layout arithmetic uses NaN to mean "no constraint". NaN compares false
//! against everything, so code must ask [`is_undefined`] before comparing and
//! use these helpers instead of `f32::max`/`f32::min`, which silently drop NaN.

/// The "no constraint" sentinel.
pub const UNDEFINED: f32 = f32::NAN;

const EPSILON: f32 = 0.0001;

#[inline]
pub fn is_undefined(value: f32) -> bool {
    value.is_nan()
}

#[inline]
pub fn is_defined(value: f32) -> bool {
    !value.is_nan()
}

/// Equality that treats two undefined values as equal and tolerates float noise.
pub fn floats_equal(a: f32, b: f32) -> bool {
    match (is_undefined(a), is_undefined(b)) {
        (true, true) => true,
        (false, false) => (a - b).abs() < EPSILON,
        _ => false,
    }
}

/// Maximum that returns the defined operand when the other is undefined.
pub fn float_max(a: f32, b: f32) -> f32 {
    match (is_undefined(a), is_undefined(b)) {
        (false, false) => a.max(b),
        (true, _) => b,
        (false, true) => a,
    }
}

/// Minimum that returns the defined operand when the other is undefined.
pub fn float_min(a: f32, b: f32) -> f32 {
    match (is_undefined(a), is_undefined(b)) {
        (false, false) => a.min(b),
        (true, _) => b,
        (false, true) => a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_equality() {
        assert!(floats_equal(UNDEFINED, UNDEFINED));
        assert!(!floats_equal(UNDEFINED, 0.0));
        assert!(floats_equal(1.0, 1.00001));
        assert!(!floats_equal(1.0, 1.01));
    }

    #[test]
    fn test_max_min_prefer_defined() {
        assert_eq!(float_max(UNDEFINED, 3.0), 3.0);
        assert_eq!(float_max(3.0, UNDEFINED), 3.0);
        assert_eq!(float_min(2.0, 5.0), 2.0);
        assert!(is_undefined(float_min(UNDEFINED, UNDEFINED)));
    }
}
