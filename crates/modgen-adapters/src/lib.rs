//! Infrastructure adapters for modgen.
//!
//! This crate implements the ports defined in
//! `modgen_core::application::ports`. It contains all external dependencies
//! and I/O operations: local and in-memory filesystems, template storage
//! with a built-in template set, the substitution renderer, and the
//! process runner for post-emit hooks.

pub mod filesystem;
pub mod process;
pub mod renderer;
pub mod store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{DetachedRunner, RecordingRunner};
pub use renderer::SimpleRenderer;
pub use store::{LocalTemplateStore, MemoryTemplateStore};
