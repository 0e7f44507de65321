// Single writer: `add` takes `&mut self`, ranking only borrows.

use std::collections::{BTreeMap, BTreeSet};

use crate::corpus::Sentence;
use crate::corpus::ranking::{rank, Scorer, TfIdfScorer};
use crate::text::{tokens, Stopwords};
use crate::types::identifiers::SequenceIndex;
use crate::types::summary::ScoredSentence;

/// Sentences of one document plus the token statistics TF-IDF needs.
///
/// `token_counts` and `document_matches` always have the same keys: every
/// token that appears in at least one sentence.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sentences: Vec<Sentence>,
    token_counts: BTreeMap<String, usize>,
    document_matches: BTreeMap<String, usize>,
    stopwords: Option<Stopwords>,
    next_index: usize,
}

impl Corpus {
    pub fn new(stopwords: Option<Stopwords>) -> Self {
        Corpus {
            stopwords,
            ..Self::default()
        }
    }

    /// Tokenize `text` and append it as the next sentence.
    ///
    /// Empty text is still added: it has no tokens and will score 0.
    pub fn add(&mut self, text: impl Into<String>) -> SequenceIndex {
        let text = text.into();
        let sentence_tokens = tokens(&text, self.stopwords.as_ref());

        for token in &sentence_tokens {
            *self.token_counts.entry(token.clone()).or_insert(0) += 1;
        }
        let distinct: BTreeSet<&String> = sentence_tokens.iter().collect();
        for token in distinct {
            *self.document_matches.entry(token.clone()).or_insert(0) += 1;
        }

        let index = SequenceIndex::new(self.next_index);
        self.next_index += 1;

        tracing::trace!(index = index.get(), tokens = sentence_tokens.len(), "sentence added");
        self.sentences.push(Sentence::new(text, sentence_tokens, index));
        index
    }

    /// Rank every sentence by the sum of its tokens' TF-IDF values,
    /// highest first. Ties keep insertion order.
    pub fn compute(&self) -> Vec<ScoredSentence<'_>> {
        self.compute_with(&TfIdfScorer)
    }

    pub fn compute_with<S: Scorer>(&self, scorer: &S) -> Vec<ScoredSentence<'_>> {
        rank(self, scorer)
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn stopwords(&self) -> Option<&Stopwords> {
        self.stopwords.as_ref()
    }

    /// Occurrences of `token` across all sentences.
    pub fn token_count(&self, token: &str) -> usize {
        self.token_counts.get(token).copied().unwrap_or(0)
    }

    /// Number of sentences containing `token` at least once.
    pub fn document_matches(&self, token: &str) -> usize {
        self.document_matches.get(token).copied().unwrap_or(0)
    }

    pub fn token_counts(&self) -> &BTreeMap<String, usize> {
        &self.token_counts
    }

    pub fn document_match_counts(&self) -> &BTreeMap<String, usize> {
        &self.document_matches
    }

    /// Sum of all token occurrences.
    pub fn total_tokens(&self) -> usize {
        self.token_counts.values().sum()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.token_counts.len()
    }
}
