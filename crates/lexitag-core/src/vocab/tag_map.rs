use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::vocab::read_indexed_lines;

/// Tag-to-index table read from `tags.txt`.
#[derive(Debug, Clone, Default)]
pub struct TagMap {
    tag_to_index: HashMap<String, u32>,
    tags: Vec<String>,
}

impl TagMap {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (tag_to_index, tags) = read_indexed_lines(path.as_ref())?;
        debug!(path = ?path.as_ref(), tags = tags.len(), "loaded tag map");
        Ok(Self { tag_to_index, tags })
    }

    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        let tag_to_index = tags
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i as u32))
            .collect();
        Self { tag_to_index, tags }
    }

    pub fn index_of(&self, tag: &str) -> Option<u32> {
        self.tag_to_index.get(tag).copied()
    }

    /// Tag name at a predicted index.
    pub fn name_of(&self, index: u32) -> Option<&str> {
        self.tags.get(index as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
