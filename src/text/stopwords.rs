use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SummaryError};

/// A set of tokens excluded from scoring.
///
/// Membership is exact: tokens are lowercased before lookup, the list itself
/// is kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Stopwords {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a whitespace-delimited list.
    pub fn parse(list: &str) -> Self {
        Self::from_words(list.split_whitespace())
    }

    pub fn from_reader<R: Read>(mut reader: R) -> std::io::Result<Self> {
        let mut list = String::new();
        reader.read_to_string(&mut list)?;
        Ok(Self::parse(&list))
    }

    /// Read a whitespace-delimited stopword file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let list = fs::read_to_string(path).map_err(|e| SummaryError::read(path, e))?;
        let stopwords = Self::parse(&list);
        tracing::debug!(path = %path.display(), count = stopwords.len(), "loaded stopwords");
        Ok(stopwords)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
