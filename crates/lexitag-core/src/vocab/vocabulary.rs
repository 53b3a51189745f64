use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, trace};

use crate::config::DatasetParams;
use crate::error::{LexitagError, Result};
use crate::vocab::read_indexed_lines;

/// Word-to-index table with resolved unknown and padding entries.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_to_index: HashMap<String, u32>,
    words: Vec<String>,
    unk_index: u32,
    pad_index: u32,
}

impl Vocabulary {
    /// Load `words.txt` and resolve the reserved entries named by the
    /// dataset parameters.
    pub fn from_file<P: AsRef<Path>>(path: P, dataset: &DatasetParams) -> Result<Self> {
        let (word_to_index, words) = read_indexed_lines(path.as_ref())?;
        debug!(path = ?path.as_ref(), words = words.len(), "loaded vocabulary");
        Self::with_reserved(word_to_index, words, &dataset.unk_word, &dataset.pad_word)
    }

    /// Build a vocabulary from words in index order.
    pub fn from_words<I, S>(words: I, unk_word: &str, pad_word: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let word_to_index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i as u32))
            .collect();
        Self::with_reserved(word_to_index, words, unk_word, pad_word)
    }

    /// Resolve the unknown and padding indices. Either one missing is an error.
    fn with_reserved(
        word_to_index: HashMap<String, u32>,
        words: Vec<String>,
        unk_word: &str,
        pad_word: &str,
    ) -> Result<Self> {
        let reserved = |token: &str| {
            word_to_index
                .get(token)
                .copied()
                .ok_or_else(|| LexitagError::MissingReservedToken {
                    token: token.to_string(),
                })
        };
        let unk_index = reserved(unk_word)?;
        let pad_index = reserved(pad_word)?;

        Ok(Self {
            word_to_index,
            words,
            unk_index,
            pad_index,
        })
    }

    pub fn index_of(&self, word: &str) -> Option<u32> {
        self.word_to_index.get(word).copied()
    }

    /// Index of `word`, or the unknown index when the word is not present.
    ///
    /// The unknown index is that of the dataset's configured `unk_word`
    /// (`UNK` unless `dataset_params.json` renames it), never a hard-coded
    /// literal `UNK` entry.
    pub fn index_or_unk(&self, word: &str) -> u32 {
        self.index_of(word).unwrap_or_else(|| {
            trace!(word, "out of vocabulary");
            self.unk_index
        })
    }

    pub fn word_of(&self, index: u32) -> Option<&str> {
        self.words.get(index as usize).map(String::as_str)
    }

    pub fn unk_index(&self) -> u32 {
        self.unk_index
    }

    pub fn pad_index(&self) -> u32 {
        self.pad_index
    }

    /// Number of lines in the vocabulary file.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
