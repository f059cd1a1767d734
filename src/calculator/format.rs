//! Number formatting for the calculator display.

/// Text shown after an arithmetic failure.
pub const ERROR_MARKER: &str = "Error";

/// Decimal places kept for fractional results.
const PRECISION: usize = 10;

/// Format a computed value for the display.
///
/// Whole numbers print without a fractional part, everything else is
/// rounded to ten decimal places with trailing zeros removed. Neither form
/// ever uses scientific notation.
pub fn format_value(value: f64) -> String {
    let formatted = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let rounded = format!("{:.*}", PRECISION, value);
        rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    };

    // Rounding can leave a negative zero behind.
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}

/// Parse display text as an operand.
///
/// The error marker and anything else that is not a numeral count as zero,
/// the same value a freshly cleared display holds.
pub fn parse_display(display: &str) -> f64 {
    display.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_results() {
        assert_eq!(format_value(2.0), "2");
        assert_eq!(format_value(-15.0), "-15");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_large_integers_avoid_exponent() {
        assert_eq!(format_value(1e16), "10000000000000000");
        assert!(!format_value(1e300).contains('e'));
    }

    #[test]
    fn test_fractional_results() {
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_value(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_value(-0.25), "-0.25");
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        assert_eq!(format_value(1e-12), "0");
        assert_eq!(format_value(-1e-12), "0");
        assert_eq!(format_value(1e-7), "0.0000001");
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("12.5"), 12.5);
        assert_eq!(parse_display("0."), 0.0);
        assert_eq!(parse_display("-3"), -3.0);
        assert_eq!(parse_display(ERROR_MARKER), 0.0);
    }
}
