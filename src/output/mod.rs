//! Terminal output formatting
//!
//! Display utilities for CLI results and the rejection text table.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_solutions_result, print_submission};
pub use formatters::{rejection_message, rejection_title};
