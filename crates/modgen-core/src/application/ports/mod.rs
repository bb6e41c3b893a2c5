//! Output ports - the traits infrastructure adapters implement.
//!
//! The application layer owns these interfaces; the adapters crate provides
//! local-disk, in-memory, and process-spawning implementations. Everything
//! is `Send + Sync` so services can be shared across threads.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::RenderContext;

/// Failure inside an adapter, reported back through a port.
///
/// Ports deliberately carry a flat error: the application layer wraps it
/// with the context it has (template id, target path) before surfacing it.
#[derive(Debug, Error)]
pub enum PortError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Failed(String),
}

/// Filesystem operations needed by the generation pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), PortError>;

    /// Write a file, creating missing parent directories.
    fn write_file(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> Result<String, PortError>;
}

/// Source of template text, by template id.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Load the source for a template id. When `root` is set, a file of
    /// the same name under it takes precedence over any built-in.
    fn load(&self, template_id: &str, root: &Option<PathBuf>) -> Result<String, PortError>;
}

/// Substitutes context variables into template text.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, source: &str, context: &RenderContext) -> Result<String, PortError>;
}

/// Spawns post-emit hook commands, detached from the generator process.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn spawn(&self, command: &str, args: &[String]) -> Result<(), PortError>;
}
