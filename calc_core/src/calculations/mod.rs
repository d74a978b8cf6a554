//! # Calculations
//!
//! The manual-work cost calculation, split the usual way:
//!
//! - [`inputs`] - `CalculatorInputs` and the `InputField` selector
//! - [`savings`] - `CalculatorResults` and the pure `compute_results` function
//!
//! Both types serialize to JSON so results can be handed to other tools
//! without a presentation layer in between.

pub mod inputs;
pub mod savings;

// Re-export commonly used types
pub use inputs::{CalculatorInputs, InputField};
pub use savings::{compute_results, weekly_admin_cost, CalculatorResults};
