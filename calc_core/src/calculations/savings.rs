//! # Savings Calculation
//!
//! Turns the four calculator inputs into the six metrics shown on the
//! results card.
//!
//! ## Formulas
//!
//! ```text
//! weekly  = people × hours_per_week × cost_per_hour
//! monthly_admin_cost  = weekly × 4.33
//! yearly_revenue_leak = weekly × 52
//! yearly_hours_saved  = people × hours_per_week × 52
//! yearly_savings      = yearly_revenue_leak
//! payback_period      = automation_cost / monthly_admin_cost        (months)
//! first_year_roi      = (yearly_savings - automation_cost) / automation_cost × 100   (%)
//! ```
//!
//! No denominator is guarded. A zero automation cost or a zero monthly cost
//! produces `inf`/`NaN` in the affected metrics, and those values are
//! returned as-is.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::inputs::CalculatorInputs;
//! use calc_core::calculations::savings::compute_results;
//!
//! let results = compute_results(&CalculatorInputs::default());
//! assert_eq!(results.yearly_revenue_leak, 351_000.0);
//! assert_eq!(results.first_year_roi, 5_750.0);
//! ```

use serde::{Deserialize, Serialize};

use super::inputs::CalculatorInputs;

/// Average number of weeks in a month
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Weeks in a year
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Derived metrics for one set of inputs.
///
/// Never stored; recompute from the current inputs whenever they change.
///
/// ## JSON Example
///
/// ```json
/// {
///   "monthly_admin_cost": 29227.5,
///   "yearly_revenue_leak": 351000.0,
///   "yearly_hours_saved": 7800.0,
///   "yearly_savings": 351000.0,
///   "payback_period": 0.2052861175263023,
///   "first_year_roi": 5750.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResults {
    /// Admin labor cost per month (USD)
    pub monthly_admin_cost: f64,

    /// Admin labor cost per year (USD)
    pub yearly_revenue_leak: f64,

    /// Admin hours per year that automation would free up
    pub yearly_hours_saved: f64,

    /// Savings per year once automated (USD), equal to `yearly_revenue_leak`
    pub yearly_savings: f64,

    /// Months of saved admin cost needed to recoup the automation cost
    pub payback_period: f64,

    /// First-year return on the automation cost (percent)
    pub first_year_roi: f64,
}

impl CalculatorResults {
    /// True when any metric is `inf` or `NaN`.
    ///
    /// Happens when `automation_cost` is zero, or when any of people, hours
    /// or cost per hour is zero (payback divides by the monthly cost).
    pub fn has_undefined_metrics(&self) -> bool {
        [
            self.monthly_admin_cost,
            self.yearly_revenue_leak,
            self.yearly_hours_saved,
            self.yearly_savings,
            self.payback_period,
            self.first_year_roi,
        ]
        .iter()
        .any(|v| !v.is_finite())
    }
}

/// Weekly admin labor cost: people × hours × hourly cost.
pub fn weekly_admin_cost(inputs: &CalculatorInputs) -> f64 {
    inputs.people * inputs.hours_per_week * inputs.cost_per_hour
}

/// Compute all six metrics. Pure and infallible.
pub fn compute_results(inputs: &CalculatorInputs) -> CalculatorResults {
    let weekly = weekly_admin_cost(inputs);

    let monthly_admin_cost = weekly * WEEKS_PER_MONTH;
    let yearly_revenue_leak = weekly * WEEKS_PER_YEAR;
    let yearly_hours_saved = inputs.people * inputs.hours_per_week * WEEKS_PER_YEAR;
    let yearly_savings = yearly_revenue_leak;
    let payback_period = inputs.automation_cost / monthly_admin_cost;
    let first_year_roi = ((yearly_savings - inputs.automation_cost) / inputs.automation_cost) * 100.0;

    CalculatorResults {
        monthly_admin_cost,
        yearly_revenue_leak,
        yearly_hours_saved,
        yearly_savings,
        payback_period,
        first_year_roi,
    }
}
