//! # Calculator Inputs
//!
//! The four numbers a visitor types into the calculator, and the field
//! selector used to update them one at a time.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::inputs::{CalculatorInputs, InputField};
//!
//! let mut inputs = CalculatorInputs::default();
//! inputs.set(InputField::CostPerHour, 100.0);
//! assert_eq!(inputs.cost_per_hour, 100.0);
//! assert_eq!(inputs.people, 10.0);
//!
//! let field: InputField = "hoursPerWeek".parse().unwrap();
//! assert_eq!(field, InputField::HoursPerWeek);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default headcount doing admin work
pub const DEFAULT_PEOPLE: f64 = 10.0;
/// Default admin hours per person per week
pub const DEFAULT_HOURS_PER_WEEK: f64 = 15.0;
/// Default fully-loaded cost per hour (USD)
pub const DEFAULT_COST_PER_HOUR: f64 = 45.0;
/// Default one-time automation investment (USD)
pub const DEFAULT_AUTOMATION_COST: f64 = 6000.0;

/// Inputs to the manual-work cost calculation.
///
/// Values are not range-checked. Zero and negative numbers are accepted and
/// flow straight into the formulas; range hints live in the content document
/// and are advisory only.
///
/// ## JSON Example
///
/// ```json
/// {
///   "people": 10.0,
///   "hours_per_week": 15.0,
///   "cost_per_hour": 45.0,
///   "automation_cost": 6000.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Number of people doing admin work
    pub people: f64,

    /// Admin hours per person per week
    pub hours_per_week: f64,

    /// Fully-loaded labor cost per hour (USD)
    pub cost_per_hour: f64,

    /// One-time cost of the automation (USD)
    pub automation_cost: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        CalculatorInputs {
            people: DEFAULT_PEOPLE,
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
            cost_per_hour: DEFAULT_COST_PER_HOUR,
            automation_cost: DEFAULT_AUTOMATION_COST,
        }
    }
}

impl CalculatorInputs {
    /// Create inputs from explicit values.
    pub fn new(people: f64, hours_per_week: f64, cost_per_hour: f64, automation_cost: f64) -> Self {
        CalculatorInputs {
            people,
            hours_per_week,
            cost_per_hour,
            automation_cost,
        }
    }

    /// Read a single field.
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::People => self.people,
            InputField::HoursPerWeek => self.hours_per_week,
            InputField::CostPerHour => self.cost_per_hour,
            InputField::AutomationCost => self.automation_cost,
        }
    }

    /// Replace a single field, leaving the other three untouched.
    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::People => self.people = value,
            InputField::HoursPerWeek => self.hours_per_week = value,
            InputField::CostPerHour => self.cost_per_hour = value,
            InputField::AutomationCost => self.automation_cost = value,
        }
    }

    /// Check that every field is a finite number.
    ///
    /// This is the only invariant the inputs carry. Out-of-range values
    /// (zero, negative, above the UI hints) are valid.
    pub fn validate(&self) -> CalcResult<()> {
        for field in InputField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field.as_str(),
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }
        Ok(())
    }
}

/// Selector for one of the four calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    People,
    HoursPerWeek,
    CostPerHour,
    AutomationCost,
}

impl InputField {
    /// All fields, in display order.
    pub const ALL: [InputField; 4] = [
        InputField::People,
        InputField::HoursPerWeek,
        InputField::CostPerHour,
        InputField::AutomationCost,
    ];

    /// Canonical snake_case name (matches the JSON field name).
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::People => "people",
            InputField::HoursPerWeek => "hours_per_week",
            InputField::CostPerHour => "cost_per_hour",
            InputField::AutomationCost => "automation_cost",
        }
    }

    /// Position of this field in [`InputField::ALL`] and in the content
    /// document's field hint list.
    pub fn index(&self) -> usize {
        match self {
            InputField::People => 0,
            InputField::HoursPerWeek => 1,
            InputField::CostPerHour => 2,
            InputField::AutomationCost => 3,
        }
    }

    /// Convert raw text from an input box into a value for this field.
    ///
    /// Behaves like a numeric text box: surrounding whitespace is ignored and
    /// an empty box reads as `0`. Text that is not a finite number is
    /// rejected.
    pub fn parse_value(&self, text: &str) -> CalcResult<f64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        let value: f64 = trimmed.parse().map_err(|_| {
            CalcError::invalid_input(self.as_str(), trimmed, "Not a number")
        })?;
        if !value.is_finite() {
            return Err(CalcError::invalid_input(
                self.as_str(),
                trimmed,
                "Value must be a finite number",
            ));
        }
        Ok(value)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputField {
    type Err = CalcError;

    /// Accepts snake_case, camelCase and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "people" => Ok(InputField::People),
            "hoursperweek" | "hours" => Ok(InputField::HoursPerWeek),
            "costperhour" | "cost" | "rate" => Ok(InputField::CostPerHour),
            "automationcost" | "automation" => Ok(InputField::AutomationCost),
            _ => Err(CalcError::unknown_field(s.trim())),
        }
    }
}
