use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a tagger or running inference.
#[derive(Debug, Error)]
pub enum LexitagError {
    /// A required input file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A JSON file could not be parsed.
    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        /// The file that was being parsed.
        path: PathBuf,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value is missing or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The dataset parameter file does not exist.
    #[error("No json file found at {path:?}, build the vocabulary for this dataset first")]
    MissingDatasetParams {
        /// Where the file was expected.
        path: PathBuf,
    },

    /// The vocabulary lacks one of its reserved tokens (unknown or padding).
    #[error("vocabulary has no entry for reserved token {token:?}")]
    MissingReservedToken {
        /// The reserved token that was looked up.
        token: String,
    },

    /// The checkpoint file does not exist.
    #[error("checkpoint not found at {path:?}")]
    CheckpointNotFound {
        /// Where the checkpoint was expected.
        path: PathBuf,
    },

    /// A batch row is shorter than the sentence it must hold.
    #[error("batch width {width} cannot hold {tokens} tokens")]
    BatchTooNarrow {
        /// The requested row width.
        width: usize,
        /// The number of tokens to encode.
        tokens: usize,
    },

    /// The pre-tokenizer rejected the input.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// Candle ML framework error.
    #[error("ML inference error: {0}")]
    Candle(String),
}

impl From<candle_core::Error> for LexitagError {
    fn from(err: candle_core::Error) -> Self {
        Self::Candle(err.to_string())
    }
}

/// Result type alias for lexitag operations.
pub type Result<T> = std::result::Result<T, LexitagError>;
