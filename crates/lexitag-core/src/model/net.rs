use candle_core::{D, Result, Tensor};
use candle_nn::{Embedding, LSTM, LSTMConfig, Linear, Module, RNN, VarBuilder};

use crate::config::ModelConfig;

/// Embedding + LSTM + linear tagger.
///
/// Parameter names follow the PyTorch layout of the checkpoints it restores:
/// `embedding.weight`, `lstm.{weight,bias}_{ih,hh}_l0`, `fc.{weight,bias}`.
pub struct TaggerNet {
    pub embedding: Embedding,
    pub lstm: LSTM,
    pub fc: Linear,
    config: ModelConfig,
}

impl TaggerNet {
    pub fn new(config: &ModelConfig, vb: VarBuilder) -> Result<Self> {
        let embedding = candle_nn::embedding(
            config.vocab_size,
            config.embedding_dim,
            vb.pp("embedding"),
        )?;
        let lstm = candle_nn::lstm(
            config.embedding_dim,
            config.lstm_hidden_dim,
            LSTMConfig::default(),
            vb.pp("lstm"),
        )?;
        let fc = candle_nn::linear(config.lstm_hidden_dim, config.number_of_tags, vb.pp("fc"))?;

        Ok(Self {
            embedding,
            lstm,
            fc,
            config: *config,
        })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Forward pass producing per-token log-probabilities.
    /// `input_ids`: [batch_size, seq_len] (u32)
    /// returns: [batch_size * seq_len, number_of_tags]
    pub fn forward(&self, input_ids: &Tensor) -> Result<Tensor> {
        let embedded = self.embedding.forward(input_ids)?;

        let states = self.lstm.seq(&embedded)?;
        let hidden = self.lstm.states_to_tensor(&states)?;

        // Flatten so each row is one token position
        let (batch, seq_len, hidden_dim) = hidden.dims3()?;
        let hidden = hidden.reshape((batch * seq_len, hidden_dim))?;

        let logits = self.fc.forward(&hidden)?;
        candle_nn::ops::log_softmax(&logits, D::Minus1)
    }

    /// Index of the best-scoring tag for every token position.
    pub fn predict(&self, input_ids: &Tensor) -> Result<Vec<u32>> {
        self.forward(input_ids)?.argmax(D::Minus1)?.to_vec1::<u32>()
    }
}
