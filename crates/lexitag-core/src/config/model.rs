use serde::{Deserialize, Serialize};

use crate::config::Params;
use crate::error::{LexitagError, Result};

/// Dimensions needed to build a [`TaggerNet`](crate::model::TaggerNet).
///
/// `vocab_size` and `number_of_tags` normally come from the dataset
/// parameters merged into the model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub vocab_size: usize,
    pub embedding_dim: usize,
    pub lstm_hidden_dim: usize,
    pub number_of_tags: usize,
}

impl ModelConfig {
    /// Extract the network dimensions from a merged parameter set.
    pub fn from_params(params: &Params) -> Result<Self> {
        let config: Self = params.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("vocab_size", self.vocab_size),
            ("embedding_dim", self.embedding_dim),
            ("lstm_hidden_dim", self.lstm_hidden_dim),
            ("number_of_tags", self.number_of_tags),
        ];
        match fields.iter().find(|(_, v)| *v == 0) {
            Some((name, _)) => Err(LexitagError::Config(format!("{name} must be positive"))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, usize)]) -> Params {
        let mut params = Params::new();
        for (k, v) in entries {
            params.set(*k, *v);
        }
        params
    }

    #[test]
    fn test_from_params() {
        let p = params(&[
            ("vocab_size", 20),
            ("embedding_dim", 8),
            ("lstm_hidden_dim", 6),
            ("number_of_tags", 4),
        ]);
        let config = ModelConfig::from_params(&p).unwrap();
        assert_eq!(config.vocab_size, 20);
        assert_eq!(config.number_of_tags, 4);
    }

    #[test]
    fn test_missing_key_is_named() {
        let p = params(&[("vocab_size", 20), ("embedding_dim", 8), ("number_of_tags", 4)]);
        let err = ModelConfig::from_params(&p).unwrap_err();
        assert!(err.to_string().contains("lstm_hidden_dim"));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let p = params(&[
            ("vocab_size", 20),
            ("embedding_dim", 0),
            ("lstm_hidden_dim", 6),
            ("number_of_tags", 4),
        ]);
        let err = ModelConfig::from_params(&p).unwrap_err();
        assert!(err.to_string().contains("embedding_dim must be positive"));
    }
}
