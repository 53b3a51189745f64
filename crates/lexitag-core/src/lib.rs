//! # Lexitag Core
//!
//! Named-entity tagging with a pretrained embedding + LSTM network. Loads
//! hyperparameters, vocabulary, tag map and checkpoint, then tags sentences
//! one token at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexitag_core::{SentenceBatch, Tokenizer, Vocabulary};
//!
//! let vocab = Vocabulary::from_words(["<pad>", "UNK", "breaking", "news"], "UNK", "<pad>").unwrap();
//! let tokens = Tokenizer::new().unwrap().tokenize("Breaking news").unwrap();
//! let batch = SentenceBatch::encode_exact(&tokens, &vocab).unwrap();
//!
//! assert_eq!(batch.ids(), [2, 3]);
//! ```
pub mod batch;
pub mod config;
pub mod error;
pub mod model;
pub mod predictor;
pub mod tokenizer;
pub mod vocab;

// Re-export primary API
pub use batch::SentenceBatch;
pub use config::{DatasetParams, ModelConfig, Params};
pub use error::{LexitagError, Result};
pub use model::TaggerNet;
pub use predictor::{Prediction, Predictor, PredictorPaths};
pub use tokenizer::{Token, Tokenizer};
pub use vocab::{TagMap, Vocabulary};
