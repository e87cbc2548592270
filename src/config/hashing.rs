//! Password hashing configuration (Argon2id)

use serde::Deserialize;

use super::error::ValidationError;

/// Argon2id cost parameters
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HashingConfig {
    /// Memory cost in KiB
    #[serde(default = "default_memory_cost")]
    pub memory_cost_kib: u32,

    /// Number of passes
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Degree of parallelism (lanes)
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl HashingConfig {
    /// Validate hashing parameters
    ///
    /// Argon2 needs at least one pass, at least one lane, and 8 KiB of
    /// memory per lane.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.iterations == 0 {
            return Err(ValidationError::InvalidHashingParams(
                "iterations must be at least 1".to_string(),
            ));
        }
        if self.parallelism == 0 {
            return Err(ValidationError::InvalidHashingParams(
                "parallelism must be at least 1".to_string(),
            ));
        }
        if u64::from(self.memory_cost_kib) < 8 * u64::from(self.parallelism) {
            return Err(ValidationError::InvalidHashingParams(format!(
                "memory_cost_kib must be at least {} for parallelism {}",
                8 * u64::from(self.parallelism),
                self.parallelism
            )));
        }
        Ok(())
    }
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: default_memory_cost(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

// OWASP minimum for Argon2id: m=19 MiB, t=2, p=1
fn default_memory_cost() -> u32 {
    19_456
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
