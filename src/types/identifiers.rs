use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Position of a sentence in the order it was added to its corpus.
///
/// Assigned by the owning [`Corpus`](crate::corpus::Corpus) and only used to
/// put a selection back into document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceIndex(usize);

impl SequenceIndex {
    pub(crate) fn new(value: usize) -> Self {
        SequenceIndex(value)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Content hash of the text a summary was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceVersion(String);

impl SourceVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SourceVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
