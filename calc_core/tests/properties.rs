//! Property tests for the calculator formulas and engine.

use calc_core::{compute_results, Calculator, CalculatorInputs, InputField};
use proptest::prelude::*;

fn inputs_strategy() -> impl Strategy<Value = CalculatorInputs> {
    (1.0f64..50.0, 1.0f64..40.0, 20.0f64..200.0, 1.0f64..100_000.0)
        .prop_map(|(p, h, c, a)| CalculatorInputs::new(p.round(), h, c, a))
}

fn field_strategy() -> impl Strategy<Value = InputField> {
    prop::sample::select(InputField::ALL.to_vec())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    /// Same inputs, same results.
    #[test]
    fn results_are_deterministic(inputs in inputs_strategy()) {
        prop_assert_eq!(compute_results(&inputs), compute_results(&inputs));
    }

    /// Yearly savings is the yearly revenue leak under another name.
    #[test]
    fn yearly_savings_equals_revenue_leak(
        p in -100.0f64..100.0,
        h in -100.0f64..100.0,
        c in -500.0f64..500.0,
        a in -1e6f64..1e6,
    ) {
        let r = compute_results(&CalculatorInputs::new(p, h, c, a));
        prop_assert_eq!(r.yearly_savings.to_bits(), r.yearly_revenue_leak.to_bits());
    }

    /// Doubling headcount doubles costs and hours and halves payback.
    #[test]
    fn doubling_people_scales_metrics(inputs in inputs_strategy()) {
        let base = compute_results(&inputs);
        let mut doubled_inputs = inputs;
        doubled_inputs.people *= 2.0;
        let doubled = compute_results(&doubled_inputs);

        prop_assert!(close(doubled.monthly_admin_cost, base.monthly_admin_cost * 2.0));
        prop_assert!(close(doubled.yearly_revenue_leak, base.yearly_revenue_leak * 2.0));
        prop_assert!(close(doubled.yearly_hours_saved, base.yearly_hours_saved * 2.0));
        prop_assert!(close(doubled.payback_period, base.payback_period / 2.0));
        prop_assert!(doubled.first_year_roi > base.first_year_roi);
    }

    /// Setting one field leaves the other three untouched.
    #[test]
    fn set_input_touches_one_field(
        inputs in inputs_strategy(),
        field in field_strategy(),
        value in -1e6f64..1e6,
    ) {
        let mut calc = Calculator::with_inputs(inputs);
        calc.set_input(field, value);

        for other in InputField::ALL {
            let expected = if other == field { value } else { inputs.get(other) };
            prop_assert_eq!(calc.inputs().get(other), expected);
        }
    }

    /// Reset always lands on the defaults, however many times it runs.
    #[test]
    fn reset_restores_defaults(inputs in inputs_strategy(), times in 1usize..5) {
        let mut calc = Calculator::with_inputs(inputs);
        for _ in 0..times {
            calc.reset();
            prop_assert_eq!(*calc.inputs(), CalculatorInputs::new(10.0, 15.0, 45.0, 6000.0));
        }
    }

    /// Finite, non-zero inputs never produce non-finite results.
    #[test]
    fn positive_inputs_are_fully_defined(inputs in inputs_strategy()) {
        prop_assert!(!compute_results(&inputs).has_undefined_metrics());
    }
}

#[test]
fn default_scenario_matches_worked_example() {
    let r = Calculator::new().results();
    assert!((r.monthly_admin_cost - 29_227.5).abs() < 1e-9);
    assert_eq!(r.yearly_revenue_leak, 351_000.0);
    assert_eq!(r.yearly_hours_saved, 7_800.0);
    assert_eq!(r.yearly_savings, 351_000.0);
    assert!((r.payback_period - 6000.0 / 29_227.5).abs() < 1e-12);
    assert_eq!(r.first_year_roi, 5_750.0);
}

#[test]
fn zero_automation_cost_propagates_infinity() {
    let mut calc = Calculator::with_inputs(CalculatorInputs::new(1.0, 1.0, 20.0, 6000.0));
    calc.set_input(InputField::AutomationCost, 0.0);
    let r = calc.results();
    assert_eq!(r.first_year_roi, f64::INFINITY);
    assert_eq!(r.payback_period, 0.0);
}
