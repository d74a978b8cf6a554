//! # Calculator Engine
//!
//! Owns the current inputs for one session. Inputs change one field at a
//! time (or all at once via [`Calculator::reset`]), and results are always
//! recomputed from the current inputs, never cached.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculator::Calculator;
//! use calc_core::calculations::InputField;
//!
//! let mut calc = Calculator::new();
//! calc.set_input(InputField::People, 20.0);
//! assert_eq!(calc.results().yearly_hours_saved, 15_600.0);
//!
//! calc.reset();
//! assert_eq!(calc.inputs().people, 10.0);
//! ```

use tracing::{debug, warn};

use crate::calculations::{compute_results, CalculatorInputs, CalculatorResults, InputField};

/// Session-scoped calculator state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    inputs: CalculatorInputs,
}

impl Calculator {
    /// Create a calculator holding the default inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator holding the given inputs.
    pub fn with_inputs(inputs: CalculatorInputs) -> Self {
        Calculator { inputs }
    }

    /// Current inputs.
    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    /// Replace one input. Any real number is accepted; there is no clamping.
    pub fn set_input(&mut self, field: InputField, value: f64) {
        let previous = self.inputs.get(field);
        self.inputs.set(field, value);
        debug!(field = %field, previous, value, "calculator input updated");
    }

    /// Restore the default inputs (10 people, 15 h/week, $45/h, $6,000).
    pub fn reset(&mut self) {
        self.inputs = CalculatorInputs::default();
        debug!("calculator inputs reset to defaults");
    }

    /// Results for the current inputs.
    pub fn results(&self) -> CalculatorResults {
        let results = compute_results(&self.inputs);
        if results.has_undefined_metrics() {
            warn!(
                inputs = ?self.inputs,
                "calculator results contain non-finite values"
            );
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_uses_defaults() {
        let calc = Calculator::new();
        assert_eq!(*calc.inputs(), CalculatorInputs::new(10.0, 15.0, 45.0, 6000.0));
    }

    #[test]
    fn test_set_input_isolation() {
        let mut calc = Calculator::new();
        calc.set_input(InputField::CostPerHour, 100.0);
        assert_eq!(*calc.inputs(), CalculatorInputs::new(10.0, 15.0, 100.0, 6000.0));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut calc = Calculator::with_inputs(CalculatorInputs::new(1.0, 2.0, 3.0, 4.0));
        for _ in 0..3 {
            calc.reset();
            assert_eq!(*calc.inputs(), CalculatorInputs::default());
        }
    }

    #[test]
    fn test_results_track_inputs() {
        let mut calc = Calculator::new();
        let before = calc.results();
        calc.set_input(InputField::People, 20.0);
        let after = calc.results();
        assert_eq!(after.yearly_revenue_leak, before.yearly_revenue_leak * 2.0);
    }

    #[test]
    fn test_results_are_deterministic() {
        let calc = Calculator::with_inputs(CalculatorInputs::new(7.0, 12.5, 61.0, 9_999.0));
        assert_eq!(calc.results(), calc.results());
    }

    #[test]
    fn test_zero_automation_cost_does_not_panic() {
        let mut calc = Calculator::new();
        calc.set_input(InputField::AutomationCost, 0.0);
        let results = calc.results();
        assert!(results.first_year_roi.is_infinite());
    }
}
