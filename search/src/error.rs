//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, time budget exhausted, frontier exhausted) are expressed
//! via [`crate::outcome::TerminationReasonV1`] and are never errors.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No search
/// steps are taken and no statistics are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A time budget could not be interpreted (e.g. NaN seconds).
    InvalidTimeBudget { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeBudget { detail } => write!(f, "invalid time budget: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
