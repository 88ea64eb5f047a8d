//! # Harness Configuration
//!
//! Defaults, then environment overrides, then command-line overrides
//! (applied by `main`).
//!
//! | Variable | Field |
//! |----------|-------|
//! | `WORDBLOOM_WORDS` | `words_path` |
//! | `WORDBLOOM_ERROR_PROBABILITY` | `error_probability` |
//! | `WORDBLOOM_ROTATION` | `rotation` |

use std::path::PathBuf;

use tracing::{info, warn};

use crate::words::DEFAULT_ROTATION;

pub const ENV_WORDS: &str = "WORDBLOOM_WORDS";
pub const ENV_ERROR_PROBABILITY: &str = "WORDBLOOM_ERROR_PROBABILITY";
pub const ENV_ROTATION: &str = "WORDBLOOM_ROTATION";

/// How the trial report is printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Complete harness configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct HarnessConfig {
    /// Word list, one word per line.
    pub words_path: PathBuf,
    /// Target false positive rate; `None` until supplied by env or CLI.
    pub error_probability: Option<f64>,
    /// Caesar shift used to derive absent words.
    pub rotation: u8,
    /// Report format.
    pub output: OutputFormat,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from("words.txt"),
            error_probability: None,
            rotation: DEFAULT_ROTATION,
            output: OutputFormat::Text,
        }
    }
}

impl HarnessConfig {
    /// Defaults overridden from the process environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Apply overrides from a variable lookup; unparsable values are ignored
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_WORDS) {
            info!(path = %path, "Loaded word list path from environment");
            self.words_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(ENV_ERROR_PROBABILITY) {
            match raw.trim().parse::<f64>() {
                Ok(p) => self.error_probability = Some(p),
                Err(_) => warn!(value = %raw, "{} must be a floating point value", ENV_ERROR_PROBABILITY),
            }
        }

        if let Some(raw) = lookup(ENV_ROTATION) {
            match raw.trim().parse::<u8>() {
                Ok(r) => self.rotation = r,
                Err(_) => warn!(value = %raw, "{} must be an integer in 0..=255", ENV_ROTATION),
            }
        }
    }
}
