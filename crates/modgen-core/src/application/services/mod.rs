//! Application services.

pub mod generate_service;

pub use generate_service::{
    GenerateFlags, GeneratePlan, GenerateReport, GenerateRequest, GenerateService, PlannedFile,
};
