//! Maps tokens to vocabulary indices for a single-sentence batch.

use candle_core::{Device, Tensor};

use crate::error::{LexitagError, Result};
use crate::tokenizer::Token;
use crate::vocab::Vocabulary;

/// One sentence row of token indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceBatch {
    ids: Vec<u32>,
    len: usize,
}

impl SentenceBatch {
    /// Encode tokens into a row of `width` indices.
    ///
    /// The row starts out filled with the pad index and each token overwrites
    /// its position. Words missing from the vocabulary take the unknown index.
    pub fn encode(tokens: &[Token], vocab: &Vocabulary, width: usize) -> Result<Self> {
        if width < tokens.len() {
            return Err(LexitagError::BatchTooNarrow {
                width,
                tokens: tokens.len(),
            });
        }

        let mut ids = vec![vocab.pad_index(); width];
        for (slot, token) in ids.iter_mut().zip(tokens) {
            *slot = vocab.index_or_unk(&token.text);
        }

        Ok(Self {
            ids,
            len: tokens.len(),
        })
    }

    /// Encode with the row exactly as wide as the sentence.
    pub fn encode_exact(tokens: &[Token], vocab: &Vocabulary) -> Result<Self> {
        Self::encode(tokens, vocab, tokens.len())
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Number of real (non-padding) positions.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn width(&self) -> usize {
        self.ids.len()
    }

    /// `[1, width]` tensor of `u32` indices.
    pub fn to_tensor(&self, device: &Device) -> Result<Tensor> {
        Ok(Tensor::from_slice(&self.ids, (1, self.ids.len()), device)?)
    }
}
