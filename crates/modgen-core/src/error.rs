//! Unified error type for the core crate.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ErrorCategory};

pub type ModgenResult<T> = Result<T, ModgenError>;

/// Top-level error: everything a generation run can fail with.
#[derive(Debug, Error)]
pub enum ModgenError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ModgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { .. } => {
                vec!["Check .modgen.json for syntax errors".into()]
            }
            Self::Internal { .. } => {
                vec!["This is a bug; please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}
