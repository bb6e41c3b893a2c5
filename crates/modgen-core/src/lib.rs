//! Modgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the modgen
//! module-artifact generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           modgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, Store, Runner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     modgen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SimpleRenderer, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (NamingSet, GeneratorConfig, FilePlan)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! One invocation flows strictly through:
//! naming derivation → configuration resolution → target-path resolution →
//! file planning → override resolution → emission → post-emit hooks.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateFlags, GenerateReport, GenerateRequest, GenerateService,
        ports::{Filesystem, ProcessRunner, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ConfigResolver, FileCategory, FileDescriptor, FilePlan, GeneratorConfig, NameStyle,
        NamingSet, RelativePath, RenderContext, ResolvedConfig, ServiceKind, SubGeneratorConfig,
    };
    pub use crate::error::{ModgenError, ModgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
