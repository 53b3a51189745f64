//! # Sentence Tokenizer
//!
//! Lower-cases a sentence and splits it into Treebank-style word tokens:
//! punctuation is split off words, but abbreviations (`u.s.`), numbers with
//! separators (`1,000`, `3.5`), hyphenated words and ellipses stay whole, and
//! contractions split into word and clitic (`do` + `n't`, `it` + `'s`).
//! Quotes are kept as typed rather than rewritten to backticks.

use tokenizers::pre_tokenizers::split::{Split, SplitPattern};
use tokenizers::{
    OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer, SplitDelimiterBehavior,
};

use crate::error::{LexitagError, Result};

/// A token extracted from a sentence with positional information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lower-cased token text
    pub text: String,
    /// Start byte offset in the lower-cased sentence
    pub start: usize,
    /// End byte offset in the lower-cased sentence
    pub end: usize,
    /// Token index in the sequence
    pub index: usize,
}

/// Token alternatives, tried in order at each position. Input is already
/// lower-cased. The final `[^\w\s]` alternative covers every non-space
/// character, so nothing but whitespace is dropped.
const TREEBANK_PATTERN: &str = concat!(
    r"(?:[a-z]\.){2,}",       // abbreviations: u.s., e.g.
    r"|\d+(?:[.,:/]\d+)+",    // numbers: 1,000  3.5  10:30
    r"|\w+(?=n't\b)",         // do|n't, ca|n't
    r"|n't\b",
    r"|'(?:s|m|d|ll|re|ve)\b", // clitics: 's 'm 'd 'll 're 've
    r"|\w+(?:-\w+)*",         // words, hyphenated compounds
    r"|\.\.\.",
    r"|[^\w\s]",
);

/// Word-level tokenizer for tagger input.
pub struct Tokenizer {
    pre_tokenizer: Split,
}

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Result<Self> {
        // Inverted split: pattern matches are the tokens, the gaps are removed
        let pre_tokenizer = Split::new(
            SplitPattern::Regex(TREEBANK_PATTERN.to_string()),
            SplitDelimiterBehavior::Removed,
            true,
        )
        .map_err(|e| LexitagError::Tokenizer(e.to_string()))?;
        Ok(Self { pre_tokenizer })
    }

    /// Tokenize a sentence into a sequence of tokens.
    ///
    /// # Examples
    /// ```
    /// use lexitag_core::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new().unwrap();
    /// let tokens = tokenizer.tokenize("Breaking news!").unwrap();
    /// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    /// assert_eq!(texts, ["breaking", "news", "!"]);
    /// ```
    pub fn tokenize(&self, sentence: &str) -> Result<Vec<Token>> {
        let lowered = sentence.to_lowercase();
        let mut pretokenized = PreTokenizedString::from(lowered.as_str());
        self.pre_tokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| LexitagError::Tokenizer(e.to_string()))?;

        let tokens = pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .enumerate()
            .map(|(index, (text, (start, end), _))| Token {
                text: text.to_string(),
                start,
                end,
                index,
            })
            .collect();

        Ok(tokens)
    }

    /// Token texts only.
    pub fn words(&self, sentence: &str) -> Result<Vec<String>> {
        Ok(self
            .tokenize(sentence)?
            .into_iter()
            .map(|t| t.text)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokenizer = Tokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("breaking news").unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "breaking");
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[0].end, 8);
        assert_eq!(tokens[1].text, "news");
        assert_eq!(tokens[1].index, 1);
    }

    #[test]
    fn test_lowercases() {
        let tokenizer = Tokenizer::new().unwrap();
        let words = tokenizer.words("Angela Merkel visited PARIS").unwrap();
        assert_eq!(words, ["angela", "merkel", "visited", "paris"]);
    }

    #[test]
    fn test_punctuation_split() {
        let tokenizer = Tokenizer::new().unwrap();
        let words = tokenizer.words("Hello, world... (really)").unwrap();
        assert_eq!(words, ["hello", ",", "world", "...", "(", "really", ")"]);
    }

    #[test]
    fn test_abbreviations_stay_whole() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(tokenizer.words("U.S. troops").unwrap(), ["u.s.", "troops"]);
        assert_eq!(tokenizer.words("e.g. this").unwrap(), ["e.g.", "this"]);
    }

    #[test]
    fn test_contractions() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(tokenizer.words("don't go").unwrap(), ["do", "n't", "go"]);
        assert_eq!(tokenizer.words("It's fine").unwrap(), ["it", "'s", "fine"]);
        assert_eq!(
            tokenizer.words("we'll see, they're here").unwrap(),
            ["we", "'ll", "see", ",", "they", "'re", "here"]
        );
    }

    #[test]
    fn test_numbers_stay_whole() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(tokenizer.words("1,000 people").unwrap(), ["1,000", "people"]);
        assert_eq!(tokenizer.words("3.5 percent").unwrap(), ["3.5", "percent"]);
        assert_eq!(tokenizer.words("in 1984.").unwrap(), ["in", "1984", "."]);
    }

    #[test]
    fn test_hyphenated_and_final_period() {
        let tokenizer = Tokenizer::new().unwrap();
        assert_eq!(
            tokenizer.words("A well-known London firm.").unwrap(),
            ["a", "well-known", "london", "firm", "."]
        );
    }

    #[test]
    fn test_offsets_follow_lowercased_text() {
        let tokenizer = Tokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("Don't panic").unwrap();
        let spans: Vec<_> = tokens.iter().map(|t| (t.start, t.end)).collect();
        assert_eq!(spans, [(0, 2), (2, 5), (6, 11)]);
    }

    #[test]
    fn test_tokenize_empty() {
        let tokenizer = Tokenizer::new().unwrap();
        assert!(tokenizer.tokenize("").unwrap().is_empty());
        assert!(tokenizer.tokenize("   \t\n").unwrap().is_empty());
    }
}
