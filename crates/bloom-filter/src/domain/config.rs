//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filter::domain::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .capacity(10_000)
//!     .target_error_probability(0.01)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.capacity, 10_000);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::validate_inputs;
use crate::error::FilterError;

/// Bloom filter sizing configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Expected number of elements (must be > 0)
    pub capacity: usize,
    /// Target false positive rate, strictly between 0 and 1
    pub target_error_probability: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            capacity: 1_000,
            target_error_probability: 0.01,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, target_error_probability: f64) -> Result<Self, FilterError> {
        let config = Self {
            capacity,
            target_error_probability,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject zero capacity and probabilities outside (0, 1)
    pub fn validate(&self) -> Result<(), FilterError> {
        validate_inputs(self.capacity, self.target_error_probability)
    }

    /// Builder-style method to set capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style method to set target error probability
    pub fn with_target_error_probability(mut self, probability: f64) -> Self {
        self.target_error_probability = probability;
        self
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    capacity: Option<usize>,
    target_error_probability: Option<f64>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expected number of elements
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set target false positive rate (must be in (0, 1))
    pub fn target_error_probability(mut self, probability: f64) -> Self {
        self.target_error_probability = Some(probability);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            target_error_probability: self
                .target_error_probability
                .unwrap_or(defaults.target_error_probability),
        };

        config.validate()?;
        Ok(config)
    }
}
