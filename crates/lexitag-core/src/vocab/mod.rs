//! # Vocabulary Files
//!
//! Token and tag tables read from line-oriented text files, where the line
//! number of an entry is its index.

pub mod tag_map;
pub mod vocabulary;

pub use tag_map::TagMap;
pub use vocabulary::Vocabulary;

use std::collections::HashMap;
use std::path::Path;

use crate::error::{LexitagError, Result};

/// Read one entry per line. A repeated entry keeps the index of its last line.
///
/// Lines break on the same characters as Python's `str.splitlines`, so files
/// written by the vocabulary builder index identically even when an entry
/// contains a form feed or a Unicode line separator.
pub(crate) fn read_indexed_lines(path: &Path) -> Result<(HashMap<String, u32>, Vec<String>)> {
    let content = std::fs::read_to_string(path).map_err(|source| LexitagError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<String> = split_lines(&content).map(str::to_string).collect();
    let mut index = HashMap::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let i = u32::try_from(i).map_err(|_| {
            LexitagError::Config(format!("{:?} has more than u32::MAX entries", path))
        })?;
        index.insert(entry.clone(), i);
    }

    Ok((index, entries))
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every line boundary; `\r\n` counts as one and a trailing
/// boundary does not open an empty last line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((i, c)) => {
                let line = &rest[..i];
                let mut next = i + c.len_utf8();
                if c == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                rest = &rest[next..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_matches_python_boundaries() {
        let lines: Vec<_> = split_lines("a\x0cb\r\nc\u{2028}d\n").collect();
        assert_eq!(lines, ["a", "b", "c", "d"]);

        let lines: Vec<_> = split_lines("x\r\ry\u{85}\n").collect();
        assert_eq!(lines, ["x", "", "y", ""]);

        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn test_read_indexed_lines_form_feed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "<pad>\nUNK\nfoo\x0cbar\nnews\n").unwrap();

        let (index, entries) = read_indexed_lines(&path).unwrap();
        assert_eq!(entries, ["<pad>", "UNK", "foo", "bar", "news"]);
        assert_eq!(index["news"], 4);
    }
}
