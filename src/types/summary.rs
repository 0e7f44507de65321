use serde::{Deserialize, Serialize};

use crate::corpus::Sentence;
use crate::types::identifiers::{SequenceIndex, SourceVersion};

/// A sentence picked for the summary.
/// Owns its text so the result outlives the corpus it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySentence {
    pub index: SequenceIndex,
    pub text: String,
    pub score: f64,
}

/// Metadata describing how the summary was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    pub source_version: SourceVersion,
    /// Requested sentence count; 0 means every sentence.
    pub requested: usize,

    pub sentences_considered: usize,
    pub sentences_selected: usize,

    pub total_tokens: usize,
    pub vocabulary_size: usize,
}

/// The final result of a summarization run.
/// `sentences` is always in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub sentences: Vec<SummarySentence>,
    pub summary: SummaryMetadata,
}

impl SummaryResult {
    /// Selected sentence texts, one per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for sentence in &self.sentences {
            out.push_str(&sentence.text);
            out.push('\n');
        }
        out
    }
}

/// Internal: a sentence with its score, borrowed from the corpus that ranked it.
#[derive(Debug, Clone, Copy)]
pub struct ScoredSentence<'a> {
    pub sentence: &'a Sentence,
    pub score: f64,
}

impl ScoredSentence<'_> {
    pub fn to_summary_sentence(&self) -> SummarySentence {
        SummarySentence {
            index: self.sentence.index(),
            text: self.sentence.text().to_string(),
            score: self.score,
        }
    }
}
