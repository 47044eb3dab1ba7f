//! Rendering of unit lists and checksum results

/// Digits after the decimal point in a rendered checksum
pub const PRECISION: usize = 64;

/// Separator between unit tokens when padding is on
pub const PADDED_SEPARATOR: &str = " * ";

/// Separator between unit tokens when padding is off
pub const COMPACT_SEPARATOR: &str = "*";

/// Unit sentinel for letters that contribute no unit text
pub const DIMENSIONLESS: &str = "dimensionless";

/// Starting value of every product
pub const BASE_VALUE: f64 = 1.0;

/// Join unit tokens with the padded (`" * "`) or compact (`"*"`) separator
pub fn format_units<S: AsRef<str>>(tokens: &[S], padded: bool) -> String {
    let separator = if padded {
        PADDED_SEPARATOR
    } else {
        COMPACT_SEPARATOR
    };

    let mut result = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i != 0 {
            result.push_str(separator);
        }
        result.push_str(token.as_ref());
    }
    result
}

/// Fixed-point rendering with [`PRECISION`] fractional digits
///
/// The digits are the exact decimal expansion of the binary64 value, so
/// anything past the ~17th significant digit is representation noise and is
/// reproduced as-is. Non-finite values render as `inf`, `-inf` or `NaN`.
pub fn format_value(value: f64) -> String {
    format!("{:.*}", PRECISION, value)
}

/// `<value> <units>`, with a single space even when `units` is empty
pub fn format_result(value: f64, units: &str) -> String {
    let mut result = format_value(value);
    result.push(' ');
    result.push_str(units);
    result
}
