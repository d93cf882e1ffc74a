//! Rule-based task analysis
//!
//! Maps task text to a priority and category suggestion. Deterministic
//! keyword matching over the title and description, not machine learning.

pub mod model;
pub mod rules;

pub use model::{Category, Suggestion};
pub use rules::analyze;
