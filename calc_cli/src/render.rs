//! Plain-text rendering of inputs and results.

use std::fmt::Write as _;

use calc_core::content::{CalculatorContent, CookieBannerContent};
use calc_core::format::{format_currency, format_number};
use calc_core::{CalculatorInputs, CalculatorResults, InputField};

const RULE: &str = "═══════════════════════════════════════";

/// Section header: title and subtitle.
pub fn header(content: &CalculatorContent) -> String {
    format!("{RULE}\n  {}\n{RULE}\n{}\n", content.title, content.subtitle)
}

/// Current inputs with their labels and suggested ranges.
pub fn inputs(content: &CalculatorContent, inputs: &CalculatorInputs) -> String {
    let mut out = format!("{}:\n", content.inputs_title);
    for field in InputField::ALL {
        let value = format_number(inputs.get(field));
        let Some(hint) = content.hint(field) else {
            let _ = writeln!(out, "  {:<30} {:>12}", field.as_str(), value);
            continue;
        };
        let range = match hint.max {
            Some(max) => format!("{}-{}", format_number(hint.min), format_number(max)),
            None => format!("{}+", format_number(hint.min)),
        };
        let _ = writeln!(out, "  {:<30} {:>12}   [{}] ({})", hint.label, value, field, range);
    }
    out
}

/// The six result rows, labeled from the content document.
pub fn results(content: &CalculatorContent, results: &CalculatorResults) -> String {
    let labels = &content.result_labels;
    let rows = [
        (&labels.monthly_admin_cost, format_currency(results.monthly_admin_cost)),
        (&labels.yearly_revenue_leak, format_currency(results.yearly_revenue_leak)),
        (&labels.yearly_hours_saved, format_number(results.yearly_hours_saved)),
        (&labels.payback_period, format!("{} months", format_number(results.payback_period))),
        (&labels.first_year_roi, format!("{}%", format_number(results.first_year_roi))),
        (&labels.yearly_savings, format_currency(results.yearly_savings)),
    ];

    let mut out = format!("{}:\n", content.results_title);
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<30} {value:>16}");
    }
    out
}

/// Cookie notice shown until it is accepted.
pub fn cookie_notice(content: &CookieBannerContent) -> String {
    format!(
        "{} {}. Run `calc_cli consent accept` to dismiss ({}).",
        content.message, content.cookie_policy_link_text, content.accept
    )
}
