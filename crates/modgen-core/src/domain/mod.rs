//! Domain layer - pure generation logic.
//!
//! Everything in here is side-effect free: naming derivation, configuration
//! merging, path algebra, file planning, and override classification. I/O
//! lives behind the application ports.

pub mod category;
pub mod config;
pub mod context;
pub mod error;
pub mod file_plan;
pub mod naming;
pub mod paths;
pub mod target_path;

pub use category::{FileCategory, find_override};
pub use config::{
    ConfigResolver, Dirs, FileExt, GeneratorConfig, OverrideTemplates, ResolvedConfig,
    ServiceKind, SubGeneratorConfig,
};
pub use context::RenderContext;
pub use error::{DomainError, ErrorCategory};
pub use file_plan::{FileDescriptor, FilePlan, build_plan};
pub use naming::{NameStyle, NamingSet};
pub use paths::RelativePath;
pub use target_path::resolve_target_folder;
