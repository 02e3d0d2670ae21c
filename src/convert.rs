//! Millimeter to inch conversion
//!
//! The conversion itself is a single multiplication; everything else here is
//! the display contract: fixed 5-decimal formatting and the fallback string
//! shown whenever the input does not represent a usable number.

/// Millimeters-to-inches multiplier (1 mm = 0.0393701 in).
pub const MM_TO_IN: f64 = 0.0393701;

/// Digits after the decimal point in every displayed inch value.
pub const DISPLAY_PRECISION: usize = 5;

/// Shown when the input is empty or unparseable.
pub const FALLBACK_OUTPUT: &str = "0.00000";

/// Parse raw input text as a millimeter value.
///
/// Strict full-string parsing: trailing garbage ("12.5abc") is rejected, and
/// so is anything non-finite ("inf", "NaN"). Input is not trimmed, so
/// whitespace-only text is rejected too.
pub fn parse_mm(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Convert raw millimeter input text to the displayed inch string.
///
/// Unparseable input falls back to [`FALLBACK_OUTPUT`]; there is no error
/// path. Pure and deterministic.
pub fn mm_to_inches(raw: &str) -> String {
    match parse_mm(raw) {
        Some(mm) => {
            let inches = mm * MM_TO_IN;
            // Normalize negative zero so "-0" renders as the zero string
            let inches = if inches == 0.0 { 0.0 } else { inches };
            format!("{:.*}", DISPLAY_PRECISION, inches)
        }
        None => FALLBACK_OUTPUT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_garbage_fall_back() {
        assert_eq!(mm_to_inches(""), "0.00000");
        assert_eq!(mm_to_inches("abc"), "0.00000");
        assert_eq!(mm_to_inches("-"), "0.00000");
        assert_eq!(mm_to_inches("."), "0.00000");
        assert_eq!(mm_to_inches(" "), "0.00000");
    }

    #[test]
    fn test_strict_parsing_rejects_trailing_garbage() {
        assert_eq!(mm_to_inches("12.5abc"), "0.00000");
        assert_eq!(mm_to_inches("5 "), "0.00000");
    }

    #[test]
    fn test_non_finite_falls_back() {
        assert_eq!(mm_to_inches("inf"), "0.00000");
        assert_eq!(mm_to_inches("-inf"), "0.00000");
        assert_eq!(mm_to_inches("NaN"), "0.00000");
    }

    #[test]
    fn test_known_values() {
        assert_eq!(mm_to_inches("10"), "0.39370");
        assert_eq!(mm_to_inches("25.4"), "1.00000");
        assert_eq!(mm_to_inches("5"), "0.19685");
        assert_eq!(mm_to_inches("0"), "0.00000");
    }

    #[test]
    fn test_negative_values_convert_normally() {
        assert_eq!(mm_to_inches("-5"), "-0.19685");
        assert_eq!(mm_to_inches("-0"), "0.00000");
    }

    #[test]
    fn test_partial_numeric_forms_the_parser_accepts() {
        // f64::from_str is the arbiter: these are valid numbers to it
        assert_eq!(mm_to_inches("12."), mm_to_inches("12"));
        assert_eq!(mm_to_inches(".5"), mm_to_inches("0.5"));
        assert_eq!(mm_to_inches("1e3"), mm_to_inches("1000"));
    }

    #[test]
    fn test_output_always_has_five_decimals() {
        for input in ["0", "1", "-1", "25.4", "0.001", "123456.789", "-0.5"] {
            let out = mm_to_inches(input);
            let (_, frac) = out.split_once('.').expect("output has a decimal point");
            assert_eq!(frac.len(), 5, "input {:?} produced {:?}", input, out);
        }
    }

    #[test]
    fn test_parse_mm() {
        assert_eq!(parse_mm("25.4"), Some(25.4));
        assert_eq!(parse_mm("-5"), Some(-5.0));
        assert_eq!(parse_mm(""), None);
        assert_eq!(parse_mm(" 5"), None);
        assert_eq!(parse_mm("inf"), None);
    }
}
