//! # Inference Driver
//!
//! Owns everything needed to tag a sentence: parameters, vocabulary, tag
//! map, and the restored network. Built once with [`Predictor::load`], then
//! used read-only.

use std::path::PathBuf;

use candle_core::Device;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::batch::SentenceBatch;
use crate::config::{DatasetParams, ModelConfig, Params};
use crate::error::{LexitagError, Result};
use crate::model::{checkpoint, TaggerNet};
use crate::tokenizer::{Token, Tokenizer};
use crate::vocab::{TagMap, Vocabulary};

pub const PARAMS_FILE: &str = "params.json";
pub const WORDS_FILE: &str = "words.txt";
pub const TAGS_FILE: &str = "tags.txt";

/// Locations of the data and model artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorPaths {
    /// Directory holding `dataset_params.json`, `words.txt` and `tags.txt`
    pub data_dir: PathBuf,
    /// Directory holding `params.json` and the checkpoint
    pub model_dir: PathBuf,
    /// Checkpoint name without extension
    pub restore_file: String,
}

impl Default for PredictorPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/small"),
            model_dir: PathBuf::from("experiments/base_model"),
            restore_file: "best".to_string(),
        }
    }
}

impl PredictorPaths {
    pub fn new(
        data_dir: impl Into<PathBuf>,
        model_dir: impl Into<PathBuf>,
        restore_file: impl Into<String>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            model_dir: model_dir.into(),
            restore_file: restore_file.into(),
        }
    }

    pub fn params_file(&self) -> PathBuf {
        self.model_dir.join(PARAMS_FILE)
    }

    pub fn words_file(&self) -> PathBuf {
        self.data_dir.join(WORDS_FILE)
    }

    pub fn tags_file(&self) -> PathBuf {
        self.data_dir.join(TAGS_FILE)
    }

    pub fn checkpoint_file(&self) -> PathBuf {
        checkpoint::path_for(&self.model_dir, &self.restore_file)
    }
}

/// Tags predicted for one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub sentence: String,
    pub tokens: Vec<String>,
    pub tag_indices: Vec<u32>,
    /// Tag names from `tags.txt`; `None` where the index has no entry
    pub tags: Vec<Option<String>>,
}

impl Prediction {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Loaded tagger.
pub struct Predictor {
    params: Params,
    dataset: DatasetParams,
    vocab: Vocabulary,
    tag_map: TagMap,
    tokenizer: Tokenizer,
    net: TaggerNet,
    device: Device,
}

impl Predictor {
    /// Load parameters, vocabulary, tags and checkpoint from disk.
    pub fn load(paths: &PredictorPaths) -> Result<Self> {
        let device = Device::Cpu;

        let mut params = Params::from_file(paths.params_file())?;
        let dataset = DatasetParams::load(&paths.data_dir)?;

        let vocab = Vocabulary::from_file(paths.words_file(), &dataset)?;
        let tag_map = TagMap::from_file(paths.tags_file())?;

        params.update(DatasetParams::path_in(&paths.data_dir))?;
        fill_dataset_sizes(&mut params, &vocab, &tag_map);
        let config = ModelConfig::from_params(&params)?;

        let net = checkpoint::restore(paths.checkpoint_file(), &config, &device)?;

        info!(
            vocab = vocab.len(),
            tags = tag_map.len(),
            embedding_dim = config.embedding_dim,
            lstm_hidden_dim = config.lstm_hidden_dim,
            "predictor ready"
        );

        Self::from_parts(params, dataset, vocab, tag_map, net, device)
    }

    /// Assemble a predictor from already-loaded pieces.
    pub fn from_parts(
        params: Params,
        dataset: DatasetParams,
        vocab: Vocabulary,
        tag_map: TagMap,
        net: TaggerNet,
        device: Device,
    ) -> Result<Self> {
        Ok(Self {
            params,
            dataset,
            vocab,
            tag_map,
            tokenizer: Tokenizer::new()?,
            net,
            device,
        })
    }

    /// Tokenize a sentence and map it to vocabulary indices.
    pub fn encode(&self, sentence: &str) -> Result<(Vec<Token>, SentenceBatch)> {
        let tokens = self.tokenizer.tokenize(sentence)?;
        let batch = SentenceBatch::encode_exact(&tokens, &self.vocab)?;
        debug!(ids = ?batch.ids(), "encoded sentence");
        Ok((tokens, batch))
    }

    /// Predict one tag per token of `sentence`.
    ///
    /// # Examples
    /// ```no_run
    /// use lexitag_core::{Predictor, PredictorPaths};
    ///
    /// let predictor = Predictor::load(&PredictorPaths::default()).unwrap();
    /// let prediction = predictor.predict("breaking news").unwrap();
    /// assert_eq!(prediction.tag_indices.len(), 2);
    /// ```
    pub fn predict(&self, sentence: &str) -> Result<Prediction> {
        let (tokens, batch) = self.encode(sentence)?;

        let tag_indices = if batch.is_empty() {
            Vec::new()
        } else {
            let input_ids = batch.to_tensor(&self.device)?;
            self.net.predict(&input_ids)?
        };

        if tag_indices.len() != tokens.len() {
            return Err(LexitagError::Candle(format!(
                "model returned {} tags for {} tokens",
                tag_indices.len(),
                tokens.len()
            )));
        }

        let tags: Vec<Option<String>> = tag_indices
            .iter()
            .map(|&i| self.tag_map.name_of(i).map(str::to_string))
            .collect();
        if tags.iter().any(Option::is_none) {
            warn!(
                tag_map = self.tag_map.len(),
                indices = ?tag_indices,
                "predicted tag index outside the tag map"
            );
        }

        Ok(Prediction {
            sentence: sentence.to_string(),
            tokens: tokens.into_iter().map(|t| t.text).collect(),
            tag_indices,
            tags,
        })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn dataset(&self) -> &DatasetParams {
        &self.dataset
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn tag_map(&self) -> &TagMap {
        &self.tag_map
    }

    pub fn config(&self) -> &ModelConfig {
        self.net.config()
    }
}

/// Take the vocabulary and tag counts from the loaded files when the
/// dataset parameters do not carry them.
fn fill_dataset_sizes(params: &mut Params, vocab: &Vocabulary, tag_map: &TagMap) {
    for (key, actual) in [("vocab_size", vocab.len()), ("number_of_tags", tag_map.len())] {
        match params.get(key).and_then(|v| v.as_u64()) {
            Some(declared) if declared as usize != actual => {
                warn!(key, declared, actual, "dataset params disagree with file contents");
            }
            Some(_) => {}
            None => {
                params.set(key, actual);
            }
        }
    }
}
