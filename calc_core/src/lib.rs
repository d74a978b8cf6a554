//! # calc_core - Manual-Work Cost Calculator
//!
//! `calc_core` answers one question for a service business: what does the
//! admin work we still do by hand cost us, and how fast would automating it
//! pay back? Four inputs (headcount, weekly hours, hourly cost, automation
//! cost) become six metrics (monthly and yearly cost, hours saved, yearly
//! savings, payback period, first-year ROI).
//!
//! ## Design Philosophy
//!
//! - **Stateless core**: `compute_results` is a pure function of the inputs
//! - **JSON-First**: inputs, results and errors implement Serialize/Deserialize
//! - **No silent fixes**: division by zero yields `inf`/`NaN`, never a guess
//! - **Display is separate**: formatting never feeds back into the numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Calculator, InputField};
//! use calc_core::format::summary;
//!
//! let mut calc = Calculator::new();
//! calc.set_input(InputField::HoursPerWeek, 20.0);
//!
//! let results = calc.results();
//! println!("{}", summary(&results));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Input/result types and the formulas
//! - [`calculator`] - Session-scoped engine with set/reset
//! - [`format`] - en-US currency and number formatting, copy summary
//! - [`content`] - Embedded display-text document
//! - [`consent`] - Persisted cookie-notice acceptance
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod calculator;
pub mod consent;
pub mod content;
pub mod errors;
pub mod format;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_results, CalculatorInputs, CalculatorResults, InputField};
pub use calculator::Calculator;
pub use errors::{CalcError, CalcResult};
