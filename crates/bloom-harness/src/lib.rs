//! # Bloom Filter Validation Harness
//!
//! Checks a [`bloom_filter::BloomFilter`] against a real word list:
//!
//! 1. Load the word list (`words`)
//! 2. Derive a disjoint absent-word sample by Caesar rotation (`words`)
//! 3. Size one filter to the word count, insert every word, assert there is
//!    no false negative and count false positives (`trial`)
//! 4. Print calibration and results (`report`)
//!
//! Settings come from [`HarnessConfig`]: defaults, then `WORDBLOOM_*`
//! environment variables, then command-line flags.

pub mod config;
pub mod error;
pub mod report;
pub mod trial;
pub mod words;

use tracing::info;

pub use config::{HarnessConfig, OutputFormat};
pub use error::HarnessError;
pub use trial::{run_trial, TrialReport};

/// Load the configured word list and run one trial at `error_probability`
pub fn run(config: &HarnessConfig, error_probability: f64) -> Result<TrialReport, HarnessError> {
    let present = words::load_words(&config.words_path)?;
    let absent = words::absent_words(&present, config.rotation);

    info!(
        words = present.len(),
        absent = absent.len(),
        rotation = config.rotation,
        "Prepared samples"
    );

    run_trial(&present, &absent, error_probability)
}
