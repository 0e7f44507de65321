pub mod collection;
pub mod ranking;
pub mod sentence;

pub use collection::Corpus;
pub use ranking::{rank, Scorer, TermWeights, TfIdfScorer};
pub use sentence::Sentence;
