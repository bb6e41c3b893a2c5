//! Application layer - use-case orchestration over the domain.
//!
//! [`GenerateService`] drives one invocation through the full pipeline and
//! talks to the outside world exclusively through the port traits in
//! [`ports`]. Adapters implementing those ports live in the infrastructure
//! crate.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    GenerateFlags, GeneratePlan, GenerateReport, GenerateRequest, GenerateService, PlannedFile,
};
