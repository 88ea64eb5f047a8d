//! Error types for the validation harness

use std::path::PathBuf;

use bloom_filter::FilterError;
use thiserror::Error;

/// Errors that can occur while running a validation trial
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Failed to read word list {path:?}: {source}")]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list {0:?} contains no words")]
    EmptyWordList(PathBuf),

    #[error("No words to insert")]
    NoPresentWords,

    /// An inserted word was reported absent. Bloom filters never do this, so
    /// seeing it means the filter is broken.
    #[error("False negative: inserted word {word:?} was reported absent")]
    FalseNegative { word: String },

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
