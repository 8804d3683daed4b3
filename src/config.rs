use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Placeholder used in debug output; the stored key is never transformed.
const REDACTED_KEY: &str = "[REDACTED_KEY]";

/// Root configuration record handed off to the training pipeline.
///
/// The field layout is a stable, versionless interchange shape: consumers
/// deserialize exactly the nesting produced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub model_name: String,
    pub training: TrainingParams,
    pub memory_management: MemoryManagement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingParams {
    pub learning_rate: f64,
    pub batch_size: usize,
    pub epochs: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryManagement {
    /// Silo name to filesystem path. Paths are opaque here; the pipeline
    /// owns existence checks.
    pub memory_silos: HashMap<String, String>,
    /// Stored and serialized verbatim. Encryption of data at rest is the
    /// downstream secret store's job, not this record's.
    pub encryption_key: String,
}

impl fmt::Debug for MemoryManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryManagement")
            .field("memory_silos", &self.memory_silos)
            .field("encryption_key", &REDACTED_KEY)
            .finish()
    }
}

/// Assemble a [`TrainingConfig`] from its parts.
///
/// Pure restructuring: every input lands in the corresponding field without
/// transformation, and no constraint is checked. Identical inputs always
/// produce an equal record. The silo map is taken by value, so later caller
/// mutation cannot reach the returned record.
pub fn build_training_config(
    model_name: String,
    learning_rate: f64,
    batch_size: usize,
    epochs: u32,
    memory_silos: HashMap<String, String>,
    encryption_key: String,
) -> TrainingConfig {
    tracing::debug!(
        model_name = %model_name,
        learning_rate,
        batch_size,
        epochs,
        silo_count = memory_silos.len(),
        "assembled training config"
    );

    TrainingConfig {
        model_name,
        training: TrainingParams {
            learning_rate,
            batch_size,
            epochs,
        },
        memory_management: MemoryManagement {
            memory_silos,
            encryption_key,
        },
    }
}

impl TrainingConfig {
    /// Opt-in sanity check. The build path never calls this; callers that
    /// want range constraints run it explicitly before handoff.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lr = self.training.learning_rate;
        if !lr.is_finite() || lr <= 0.0 {
            return Err(ConfigError::InvalidLearningRate(lr));
        }
        if self.training.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if self.training.epochs == 0 {
            return Err(ConfigError::ZeroEpochs);
        }
        for (name, path) in &self.memory_management.memory_silos {
            if path.is_empty() {
                return Err(ConfigError::EmptySiloPath(name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_config() -> TrainingConfig {
        let mut silos = HashMap::new();
        silos.insert("silo1".to_string(), "path/to/silo1".to_string());
        silos.insert("silo2".to_string(), "path/to/silo2".to_string());

        build_training_config(
            "TinyLlama".to_string(),
            0.001,
            32,
            10,
            silos,
            "my_secure_key".to_string(),
        )
    }

    #[test]
    fn example_config_validates() {
        assert_eq!(example_config().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_learning_rate() {
        let mut config = example_config();
        config.training.learning_rate = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidLearningRate(0.0))
        );

        config.training.learning_rate = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLearningRate(_))
        ));
    }

    #[test]
    fn rejects_zero_batch_size() {
        let mut config = example_config();
        config.training.batch_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroBatchSize));
    }

    #[test]
    fn rejects_zero_epochs() {
        let mut config = example_config();
        config.training.epochs = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroEpochs));
    }

    #[test]
    fn rejects_empty_silo_path() {
        let mut config = example_config();
        config
            .memory_management
            .memory_silos
            .insert("silo3".to_string(), String::new());
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptySiloPath("silo3".to_string()))
        );
    }

    #[test]
    fn debug_output_redacts_encryption_key() {
        let rendered = format!("{:?}", example_config().memory_management);
        assert!(rendered.contains("[REDACTED_KEY]"));
        assert!(!rendered.contains("my_secure_key"));
    }
}
