//! Command implementations

pub mod check;
pub mod simple;
pub mod solutions;
pub mod survey;

pub use check::{CheckResult, CheckStep, run_check};
pub use simple::run_simple;
pub use solutions::{SolutionsResult, find_solutions};
pub use survey::{SurveyStatistics, print_survey_statistics, run_survey};
