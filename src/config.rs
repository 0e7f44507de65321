use serde::{Deserialize, Serialize};

/// Sentences kept when nothing else is asked for.
pub const DEFAULT_NUM_SENTENCES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// How many top sentences to keep. 0 keeps every sentence.
    pub num_sentences: usize,
}

impl SummaryConfig {
    /// Keep every sentence.
    pub fn all() -> Self {
        Self { num_sentences: 0 }
    }

    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Map a signed count to a config; `n <= 0` keeps everything.
    pub fn from_count(n: i64) -> Self {
        Self {
            num_sentences: usize::try_from(n).unwrap_or(0),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            num_sentences: DEFAULT_NUM_SENTENCES,
        }
    }
}
