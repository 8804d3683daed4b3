use thiserror::Error;

/// Failures reported by the opt-in [`validate`](crate::TrainingConfig::validate)
/// check. Building a config never raises these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid learning rate: {0}")]
    InvalidLearningRate(f64),

    #[error("Batch size must be non-zero")]
    ZeroBatchSize,

    #[error("Epoch count must be non-zero")]
    ZeroEpochs,

    #[error("Empty path for memory silo: {0}")]
    EmptySiloPath(String),
}
