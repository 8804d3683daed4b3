//! Training cycle configuration for PMLL model pipelines.
//!
//! The crate assembles a nested [`TrainingConfig`] record from scalar inputs
//! and a memory-silo map. It performs no I/O and no validation on the build
//! path; the record is a handoff artifact for a downstream training pipeline.

pub mod config;
pub mod error;

pub use config::{build_training_config, MemoryManagement, TrainingConfig, TrainingParams};
pub use error::ConfigError;
