use crate::types::identifiers::SequenceIndex;

/// One sentence of the corpus and its tokens.
///
/// Only a [`Corpus`](super::Corpus) creates sentences, which is what keeps
/// `index` unique and increasing within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    tokens: Vec<String>,
    index: SequenceIndex,
}

impl Sentence {
    pub(crate) fn new(text: String, tokens: Vec<String>, index: SequenceIndex) -> Self {
        Sentence {
            text,
            tokens,
            index,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn index(&self) -> SequenceIndex {
        self.index
    }
}
