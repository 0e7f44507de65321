pub mod truncate;

use crate::config::SummaryConfig;
use crate::corpus::{Corpus, Scorer, TfIdfScorer};
use crate::text::{normalize, sentences, Stopwords};
use crate::types::identifiers::SourceVersion;
use crate::types::summary::{SummaryMetadata, SummaryResult};
pub use truncate::select_top;

/// Runs the whole pipeline for one document:
/// segment, normalize, accumulate, rank, keep the top sentences in document order.
pub struct Summarizer<S> {
    scorer: S,
    config: SummaryConfig,
}

impl Default for Summarizer<TfIdfScorer> {
    fn default() -> Self {
        Self::new(SummaryConfig::default())
    }
}

impl Summarizer<TfIdfScorer> {
    pub fn new(config: SummaryConfig) -> Self {
        Self {
            scorer: TfIdfScorer,
            config,
        }
    }
}

impl<S: Scorer> Summarizer<S> {
    pub fn with_scorer(scorer: S, config: SummaryConfig) -> Self {
        Self { scorer, config }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Build the corpus for `text`, one normalized sentence at a time.
    pub fn build_corpus(&self, text: &str, stopwords: Option<Stopwords>) -> Corpus {
        let mut corpus = Corpus::new(stopwords);
        for sentence in sentences(text) {
            corpus.add(normalize(&sentence));
        }
        corpus
    }

    pub fn summarize(&self, text: &str, stopwords: Option<Stopwords>) -> SummaryResult {
        let corpus = self.build_corpus(text, stopwords);

        // 1. Ranking Phase
        let ranked = corpus.compute_with(&self.scorer);

        // 2. Selection Phase, back in document order
        let requested = self.config.num_sentences;
        let selected = select_top(ranked, requested);

        debug_assert!(selected
            .windows(2)
            .all(|w| w[0].sentence.index() < w[1].sentence.index()));

        let summary = SummaryMetadata {
            source_version: SourceVersion::from_content(text.as_bytes()),
            requested,
            sentences_considered: corpus.len(),
            sentences_selected: selected.len(),
            total_tokens: corpus.total_tokens(),
            vocabulary_size: corpus.vocabulary_size(),
        };

        tracing::debug!(
            considered = summary.sentences_considered,
            selected = summary.sentences_selected,
            "summary selected"
        );

        SummaryResult {
            sentences: selected.iter().map(|s| s.to_summary_sentence()).collect(),
            summary,
        }
    }
}
