use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::{Corpus, Sentence};
use crate::types::summary::ScoredSentence;

/// Per-token weights for one corpus. Unknown tokens weigh 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeights {
    values: BTreeMap<String, f64>,
}

impl TermWeights {
    pub fn new(values: BTreeMap<String, f64>) -> Self {
        Self { values }
    }

    pub fn get(&self, token: &str) -> f64 {
        self.values.get(token).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Turns corpus statistics into sentence scores.
///
/// Scores are expected to be finite. A NaN still ranks deterministically
/// (ahead of every number) but carries no meaning.
pub trait Scorer {
    fn term_weights(&self, corpus: &Corpus) -> TermWeights;

    /// Sum of the weights of every token, repeats included.
    fn score(&self, sentence: &Sentence, weights: &TermWeights) -> f64 {
        sentence
            .tokens()
            .iter()
            .fold(0.0, |acc, t| acc + weights.get(t))
    }
}

/// TF-IDF with a corpus-wide term frequency:
///
/// - `tf(t)  = token_counts[t] / total token occurrences`
/// - `idf(t) = ln(sentence count / document_matches[t])`
///
/// A token found in every sentence gets `idf = 0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdfScorer;

impl Scorer for TfIdfScorer {
    fn term_weights(&self, corpus: &Corpus) -> TermWeights {
        let total_tokens = corpus.total_tokens();
        if total_tokens == 0 {
            return TermWeights::default();
        }

        let total_tokens = total_tokens as f64;
        let total_sentences = corpus.len() as f64;

        let values = corpus
            .token_counts()
            .iter()
            .map(|(token, &count)| {
                let tf = count as f64 / total_tokens;
                let idf = (total_sentences / corpus.document_matches(token) as f64).ln();
                (token.clone(), tf * idf)
            })
            .collect();

        TermWeights::new(values)
    }
}

/// Score every sentence of `corpus` and sort by descending score.
/// The sort is stable, so ties stay in insertion order. Ordering uses
/// `f64::total_cmp`, so a misbehaving scorer cannot break the sort.
pub fn rank<'a, S: Scorer + ?Sized>(corpus: &'a Corpus, scorer: &S) -> Vec<ScoredSentence<'a>> {
    let weights = scorer.term_weights(corpus);
    if weights.is_empty() && !corpus.is_empty() {
        tracing::warn!(
            sentences = corpus.len(),
            "corpus has no scorable tokens, every sentence scores 0"
        );
    }

    let mut scored: Vec<ScoredSentence<'a>> = corpus
        .sentences()
        .iter()
        .map(|sentence| ScoredSentence {
            sentence,
            score: scorer.score(sentence, &weights),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug_assert!(scored.windows(2).all(|w| match w[0].score.total_cmp(&w[1].score) {
        Ordering::Greater => true,
        Ordering::Equal => w[0].sentence.index() < w[1].sentence.index(),
        Ordering::Less => false,
    }));

    tracing::debug!(
        sentences = corpus.len(),
        vocabulary = weights.len(),
        "ranked corpus"
    );
    scored
}
