//! Application error taxonomy: everything that can go wrong once the
//! pipeline touches ports.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors raised while orchestrating a generation run.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A configured custom template root points at nothing. Fatal before
    /// any file plan is built.
    #[error("template root '{}' does not exist", path.display())]
    TemplateRootNotFound { path: PathBuf },

    /// No source exists for a planned template id, neither an inline
    /// override nor a stored template.
    #[error("no template found for '{template_id}'")]
    TemplateNotFound { template_id: String },

    /// A template source exists but could not be read.
    #[error("loading template '{template_id}' failed: {reason}")]
    TemplateLoadFailed { template_id: String, reason: String },

    /// Rendering a template failed. Emission aborts at this descriptor;
    /// files already written stay on disk.
    #[error("rendering '{template_id}' failed: {reason}")]
    TemplateRenderFailed { template_id: String, reason: String },

    /// A filesystem write or directory creation failed.
    #[error("filesystem operation on '{}' failed: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },

    /// A post-emit hook command could not be spawned. Callers treat this
    /// as a warning, never a generation failure.
    #[error("failed to spawn '{command}': {reason}")]
    SpawnFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateRootNotFound { path } => vec![
                format!("Create '{}' or remove templateRoot from .modgen.json", path.display()),
            ],
            Self::TemplateNotFound { template_id } => vec![
                format!("No built-in or custom template provides '{}'", template_id),
                "Check the template file names under your templateRoot".into(),
            ],
            Self::TemplateLoadFailed { template_id, .. } => vec![
                format!("The source for '{}' exists but could not be read", template_id),
            ],
            Self::TemplateRenderFailed { .. } => vec![
                "Check the template for unknown {{variables}}".into(),
                "Files emitted before the failure were kept".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Check permissions and free space for '{}'", path.display()),
            ],
            Self::SpawnFailed { command, .. } => vec![
                format!("Is '{}' installed and on your PATH?", command),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateRootNotFound { .. } => ErrorCategory::Configuration,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateLoadFailed { .. }
            | Self::TemplateRenderFailed { .. }
            | Self::Filesystem { .. }
            | Self::SpawnFailed { .. } => ErrorCategory::Internal,
        }
    }
}
