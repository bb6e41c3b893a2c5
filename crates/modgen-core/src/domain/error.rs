//! Domain error taxonomy.
//!
//! All errors are:
//! - Cloneable (collected as warnings during config resolution)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The raw name argument is empty or contains no usable characters.
    #[error("invalid name '{name}': no usable characters after normalization")]
    InvalidName { name: String },

    /// A persisted configuration value does not match the default schema
    /// shape. Recovered per-key by falling back to the default, but always
    /// surfaced to the caller.
    #[error("config for '{key}' malformed ({reason}) - using defaults")]
    MalformedConfigKey { key: String, reason: String },

    /// No sub-generator with this id is configured.
    #[error("unknown sub-generator '{id}'")]
    UnknownGenerator { id: String },

    /// Absolute paths never belong in a generation plan.
    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name } => vec![
                format!("'{}' cannot be turned into a module name", name),
                "Use at least one alphanumeric character".into(),
                "Examples: nav-bar, userList, data_table".into(),
            ],
            Self::MalformedConfigKey { key, reason } => vec![
                format!("The persisted value for '{}' was ignored: {}", key, reason),
                "Fix the key in .modgen.json or remove it to use the default".into(),
            ],
            Self::UnknownGenerator { id } => vec![
                format!("No sub-generator named '{}' is configured", id),
                "Run: modgen list".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' is absolute", path),
                "Target folders are always relative to the app root".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Validation
            }
            Self::MalformedConfigKey { .. } => ErrorCategory::Configuration,
            Self::UnknownGenerator { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
