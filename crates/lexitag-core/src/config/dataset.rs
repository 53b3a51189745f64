use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Params;
use crate::error::{LexitagError, Result};

/// File name of the dataset metadata inside a data directory.
pub const DATASET_PARAMS_FILE: &str = "dataset_params.json";

/// Metadata written alongside a built vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetParams {
    /// Vocabulary entry standing in for out-of-vocabulary words.
    #[serde(default = "default_unk_word")]
    pub unk_word: String,
    /// Vocabulary entry used to pad short sentences.
    #[serde(default = "default_pad_word")]
    pub pad_word: String,
    /// Tag assigned to padding positions.
    #[serde(default = "default_pad_tag")]
    pub pad_tag: String,
    /// Number of entries in `words.txt`, pad and unknown included.
    pub vocab_size: Option<usize>,
    /// Number of entries in `tags.txt`.
    pub number_of_tags: Option<usize>,
    /// Sentences in the training split.
    pub train_size: Option<usize>,
    /// Sentences in the validation split.
    pub dev_size: Option<usize>,
    /// Sentences in the test split.
    pub test_size: Option<usize>,
}

fn default_unk_word() -> String {
    "UNK".to_string()
}

fn default_pad_word() -> String {
    "<pad>".to_string()
}

fn default_pad_tag() -> String {
    "O".to_string()
}

impl DatasetParams {
    /// Path of the metadata file for a data directory.
    pub fn path_in<P: AsRef<Path>>(data_dir: P) -> PathBuf {
        data_dir.as_ref().join(DATASET_PARAMS_FILE)
    }

    /// Load `dataset_params.json` from a data directory.
    ///
    /// The file must exist: a missing file is reported as
    /// [`LexitagError::MissingDatasetParams`] before any read is attempted.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let path = Self::path_in(data_dir);
        if !path.is_file() {
            return Err(LexitagError::MissingDatasetParams { path });
        }
        Params::from_file(&path)?.extract()
    }
}
