//! Fixed-point rendering of stack values.

/// Number of fractional digits used when displaying or comparing stack values.
pub const DEFAULT_PRECISION: usize = 10;

/// Formats `value` with at most `precision` fractional digits.
///
/// Trailing zeros and a dangling decimal point are removed, and a value that rounds to zero
/// is printed as `0` regardless of its sign.
pub fn format_number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let mut text = format!("{:.*}", precision, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Formats every value followed by a single space, bottom of the stack first.
pub fn format_stack(values: &[f64], precision: usize) -> String {
    values
        .iter()
        .map(|value| format!("{} ", format_number(*value, precision)))
        .collect()
}

/// Rounds `value` to `precision` fractional digits.
pub fn round(value: f64, precision: usize) -> f64 {
    format_number(value, precision).parse().unwrap_or(value)
}
