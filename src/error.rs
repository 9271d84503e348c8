//! Errors surfaced by the check engine
//!
//! A failing check is never an error; it is a [`CheckResult`](crate::models::CheckResult)
//! with `passed == false`. Only usage mistakes and engine faults end up here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown category '{category}'. Valid: {}", valid.join(", "))]
    UnknownCategory { category: String, valid: Vec<String> },

    #[error("Category '{0}' has no registered checks")]
    EmptyCategory(String),

    #[error("Check '{name}' panicked: {message}")]
    CheckPanicked { name: String, message: String },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl EngineError {
    /// Whether the caller asked for something invalid, as opposed to an internal fault
    pub fn is_usage_error(&self) -> bool {
        matches!(self, EngineError::UnknownCategory { .. })
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_message_lists_valid() {
        let err = EngineError::UnknownCategory {
            category: "bogus".into(),
            valid: vec!["ci".into(), "docs".into()],
        };
        assert_eq!(err.to_string(), "Unknown category 'bogus'. Valid: ci, docs");
        assert!(err.is_usage_error());
        assert!(!EngineError::EmptyCategory("ci".into()).is_usage_error());
    }
}
