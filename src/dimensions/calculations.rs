//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any state or I/O. They
//! implement the arithmetic the [`solver`](super::solver) composes into
//! user-facing operations: parse, clamp, quantize, and derive one side from
//! the other through an aspect ratio.

/// Smallest dimension the generation API accepts.
pub const MIN_DIMENSION: u32 = 64;

/// Largest dimension the generation API accepts.
pub const MAX_DIMENSION: u32 = 1440;

/// Every committed dimension is a multiple of this step.
pub const DIMENSION_STEP: u32 = 16;

/// Length of the long side when a ratio preset is applied.
pub const PRESET_LONG_SIDE: u32 = 1024;

/// Parse free-form input the way a numeric form field does.
///
/// Surrounding whitespace is ignored and empty input reads as `0`. Anything
/// that is not a number yields `NaN`, which [`clamp_dimension`] maps to the
/// minimum.
///
/// ```
/// # use genimg::dimensions::parse_raw;
/// assert_eq!(parse_raw(" 512 "), 512.0);
/// assert_eq!(parse_raw(""), 0.0);
/// assert!(parse_raw("wide").is_nan());
/// ```
pub fn parse_raw(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Clamp a raw value into `[MIN_DIMENSION, MAX_DIMENSION]`.
///
/// `0` and `NaN` are treated as "no value" and become the minimum.
pub fn clamp_dimension(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        return MIN_DIMENSION as f64;
    }
    value.clamp(MIN_DIMENSION as f64, MAX_DIMENSION as f64)
}

/// Round to the nearest multiple of [`DIMENSION_STEP`], ties away from zero.
pub fn quantize(value: f64) -> f64 {
    let step = DIMENSION_STEP as f64;
    (value / step).round() * step
}

/// Clamp then quantize. The result is always a committed dimension.
///
/// # Examples
/// ```
/// # use genimg::dimensions::normalize_dimension;
/// assert_eq!(normalize_dimension(0.0), 64);
/// assert_eq!(normalize_dimension(2000.0), 1440);
/// // 100 / 16 = 6.25 → 6 → 96
/// assert_eq!(normalize_dimension(100.0), 96);
/// ```
pub fn normalize_dimension(value: f64) -> u32 {
    // Both bounds are multiples of the step, so quantizing a clamped value
    // cannot leave the range.
    quantize(clamp_dimension(value)) as u32
}

/// Parse and normalize a typed value in one go.
pub fn commit_raw(raw: &str) -> u32 {
    normalize_dimension(parse_raw(raw))
}

/// Whether a value is in range and on the quantization grid.
pub fn is_committed(value: u32) -> bool {
    (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) && value % DIMENSION_STEP == 0
}

/// Height matching `width` under `ratio` (as `(width, height)`), quantized and clamped.
///
/// Callers guarantee both ratio terms are non-zero.
pub fn derive_height(width: u32, ratio: (u32, u32)) -> u32 {
    let (ratio_w, ratio_h) = ratio;
    let height = quantize(width as f64 * ratio_h as f64 / ratio_w as f64);
    height.clamp(MIN_DIMENSION as f64, MAX_DIMENSION as f64) as u32
}

/// Width matching `height` under `ratio` (as `(width, height)`), quantized and clamped.
pub fn derive_width(height: u32, ratio: (u32, u32)) -> u32 {
    let (ratio_w, ratio_h) = ratio;
    let width = quantize(height as f64 * ratio_w as f64 / ratio_h as f64);
    width.clamp(MIN_DIMENSION as f64, MAX_DIMENSION as f64) as u32
}

/// Dimensions for a preset ratio with the long side fixed at [`PRESET_LONG_SIDE`].
///
/// # Examples
/// ```
/// # use genimg::dimensions::preset_dimensions;
/// assert_eq!(preset_dimensions((16, 9)), (1024, 576));
/// assert_eq!(preset_dimensions((9, 16)), (576, 1024));
/// assert_eq!(preset_dimensions((1, 1)), (1024, 1024));
/// ```
pub fn preset_dimensions(ratio: (u32, u32)) -> (u32, u32) {
    let (w, h) = ratio;
    let long = PRESET_LONG_SIDE as f64;

    if w > h {
        // Landscape: width is the long side
        (PRESET_LONG_SIDE, quantize(long * h as f64 / w as f64) as u32)
    } else {
        // Portrait or square: height is the long side
        (quantize(long * w as f64 / h as f64) as u32, PRESET_LONG_SIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // parse_raw tests
    // =========================================================================

    #[test]
    fn parse_plain_integer() {
        assert_eq!(parse_raw("768"), 768.0);
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        assert_eq!(parse_raw("  1024\n"), 1024.0);
    }

    #[test]
    fn parse_empty_is_zero() {
        assert_eq!(parse_raw(""), 0.0);
        assert_eq!(parse_raw("   "), 0.0);
    }

    #[test]
    fn parse_decimal_and_negative() {
        assert_eq!(parse_raw("99.5"), 99.5);
        assert_eq!(parse_raw("-20"), -20.0);
    }

    #[test]
    fn parse_garbage_is_nan() {
        assert!(parse_raw("12px").is_nan());
        assert!(parse_raw("abc").is_nan());
    }

    // =========================================================================
    // clamp / quantize / normalize tests
    // =========================================================================

    #[test]
    fn clamp_zero_and_nan_become_minimum() {
        assert_eq!(clamp_dimension(0.0), 64.0);
        assert_eq!(clamp_dimension(f64::NAN), 64.0);
    }

    #[test]
    fn clamp_out_of_range() {
        assert_eq!(clamp_dimension(10.0), 64.0);
        assert_eq!(clamp_dimension(-300.0), 64.0);
        assert_eq!(clamp_dimension(5000.0), 1440.0);
        assert_eq!(clamp_dimension(f64::INFINITY), 1440.0);
    }

    #[test]
    fn clamp_in_range_is_untouched() {
        assert_eq!(clamp_dimension(333.3), 333.3);
    }

    #[test]
    fn quantize_rounds_to_nearest_step() {
        assert_eq!(quantize(100.0), 96.0); // 6.25 → 6
        assert_eq!(quantize(900.0), 896.0); // 56.25 → 56
        assert_eq!(quantize(1194.67), 1200.0); // 74.67 → 75
    }

    #[test]
    fn quantize_ties_round_up() {
        // 1080 / 16 = 67.5
        assert_eq!(quantize(1080.0), 1088.0);
        assert_eq!(quantize(72.0), 80.0);
    }

    #[test]
    fn normalize_examples() {
        assert_eq!(normalize_dimension(0.0), 64);
        assert_eq!(normalize_dimension(2000.0), 1440);
        assert_eq!(normalize_dimension(100.0), 96);
        assert_eq!(normalize_dimension(1439.0), 1440);
        assert_eq!(normalize_dimension(71.0), 64);
    }

    #[test]
    fn normalize_always_committed() {
        for raw in [-5.0, 0.0, 1.0, 63.9, 64.0, 65.0, 700.5, 1431.0, 1440.0, 99999.0] {
            let v = normalize_dimension(raw);
            assert!(is_committed(v), "{raw} normalized to {v}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in 0..=1600 {
            let once = normalize_dimension(raw as f64);
            assert_eq!(normalize_dimension(once as f64), once);
        }
    }

    #[test]
    fn commit_raw_handles_text() {
        assert_eq!(commit_raw("0"), 64);
        assert_eq!(commit_raw("not a number"), 64);
        assert_eq!(commit_raw("2000"), 1440);
        assert_eq!(commit_raw(" 100 "), 96);
    }

    #[test]
    fn is_committed_checks_range_and_step() {
        assert!(is_committed(64));
        assert!(is_committed(1440));
        assert!(!is_committed(48));
        assert!(!is_committed(1456));
        assert!(!is_committed(1080));
    }

    // =========================================================================
    // derive_* tests
    // =========================================================================

    #[test]
    fn derive_width_from_height_four_three() {
        // 896 * 4 / 3 = 1194.67 → 1200
        assert_eq!(derive_width(896, (4, 3)), 1200);
    }

    #[test]
    fn derive_height_from_width_sixteen_nine() {
        // 1024 * 9 / 16 = 576
        assert_eq!(derive_height(1024, (16, 9)), 576);
    }

    #[test]
    fn derive_clamps_to_maximum() {
        // 1440 * 2 = 2880 → 1440
        assert_eq!(derive_height(1440, (1, 2)), 1440);
    }

    #[test]
    fn derive_clamps_to_minimum() {
        // 64 * 1 / 8 = 8 → quantizes to 16 → 64
        assert_eq!(derive_height(64, (8, 1)), 64);
        assert_eq!(derive_width(64, (1, 22)), 64);
    }

    // =========================================================================
    // preset_dimensions tests
    // =========================================================================

    #[test]
    fn preset_landscape_ratios() {
        assert_eq!(preset_dimensions((2, 1)), (1024, 512));
        assert_eq!(preset_dimensions((16, 9)), (1024, 576));
        // 1024 * 2 / 3 = 682.67 → 42.67 → 43 * 16
        assert_eq!(preset_dimensions((3, 2)), (1024, 688));
        assert_eq!(preset_dimensions((4, 3)), (1024, 768));
    }

    #[test]
    fn preset_portrait_ratios() {
        assert_eq!(preset_dimensions((1, 2)), (512, 1024));
        assert_eq!(preset_dimensions((9, 16)), (576, 1024));
        assert_eq!(preset_dimensions((2, 3)), (688, 1024));
    }

    #[test]
    fn preset_square_uses_height_branch() {
        assert_eq!(preset_dimensions((1, 1)), (1024, 1024));
    }
}
