//! Engine error taxonomy.
//!
//! Both variants reject a single call; nothing here is fatal to the host.
//! Dangling dependency ids and dependency cycles are deliberately NOT errors:
//! the former are ignored, the latter are reported via `in_cycle` flags on an
//! otherwise successful response.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    /// A task record failed validation; the whole batch is rejected.
    #[error("invalid task at index {index}: {field} {message}")]
    Validation {
        index: usize,
        field: &'static str,
        message: String,
    },

    /// Strategy name matched none of the built-in profiles.
    #[error(
        "unknown strategy {0:?} (expected one of: smart_balance, fastest_wins, high_impact, deadline_driven)"
    )]
    UnknownStrategy(String),
}
