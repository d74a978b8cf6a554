//! # Display Formatting
//!
//! en-US number and currency formatting for the results card and the
//! copyable summary. Formatting is output-only; nothing here feeds back into
//! calculator state, so recomputation always works from full precision.
//!
//! Rounding is half away from zero, and a negative value keeps its sign
//! even when it rounds to zero (`-0`, `-$0`). Non-finite values are rendered
//! rather than hidden: `∞`, `-∞` and `NaN`.
//!
//! ```rust
//! use calc_core::format::{format_currency, format_number};
//!
//! assert_eq!(format_currency(29_227.5), "$29,228");
//! assert_eq!(format_number(0.2052), "0.2");
//! assert_eq!(format_number(5_750.0), "5,750");
//! assert_eq!(format_number(f64::INFINITY), "∞");
//! ```

use crate::calculations::CalculatorResults;

/// Fraction digits shown for currency values
pub const CURRENCY_FRACTION_DIGITS: u32 = 0;

/// Maximum fraction digits shown for plain numbers
pub const NUMBER_FRACTION_DIGITS: u32 = 1;

/// Format a value as whole US dollars, e.g. `$351,000` or `-$1,000`.
pub fn format_currency(value: f64) -> String {
    let (negative, magnitude) = format_magnitude(value, CURRENCY_FRACTION_DIGITS);
    let sign = if negative { "-" } else { "" };
    format!("{sign}${magnitude}")
}

/// Format a value with grouping and at most one fraction digit, e.g. `7,800`
/// or `0.2`.
pub fn format_number(value: f64) -> String {
    let (negative, magnitude) = format_magnitude(value, NUMBER_FRACTION_DIGITS);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{magnitude}")
}

/// Six-line plain-text summary of the results, as copied to the clipboard.
pub fn summary(results: &CalculatorResults) -> String {
    [
        format!("Monthly Admin Cost: {}", format_currency(results.monthly_admin_cost)),
        format!("Yearly Cost: {}", format_currency(results.yearly_revenue_leak)),
        format!("Hours Saved: {}", format_number(results.yearly_hours_saved)),
        format!("Payback Period: {} months", format_number(results.payback_period)),
        format!("First Year ROI: {}%", format_number(results.first_year_roi)),
        format!("Yearly Savings: {}", format_currency(results.yearly_savings)),
    ]
    .join("\n")
}

/// Split a value into its sign and its formatted, grouped magnitude.
///
/// The sign comes from the unrounded value, so `-0.01` is `-0`.
fn format_magnitude(value: f64, max_fraction_digits: u32) -> (bool, String) {
    if value.is_nan() {
        return (false, "NaN".to_string());
    }
    if value.is_infinite() {
        return (value < 0.0, "∞".to_string());
    }

    let scale = 10f64.powi(max_fraction_digits as i32);
    let scaled = (value.abs() * scale).round();
    if scaled == 0.0 {
        return (value.is_sign_negative(), "0".to_string());
    }

    // `scaled` is integral, so this prints its exact digits.
    let digits = format!("{scaled:.0}");
    let split = max_fraction_digits as usize;
    let padded = if digits.len() <= split {
        format!("{digits:0>width$}", width = split + 1)
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - split);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = group_thousands(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    (value.is_sign_negative(), out)
}

/// Insert commas every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
