//! Text preparation: sentence segmentation, tokenization and stopwords.
//!
//! Everything here is a pure function of its input. The only I/O is
//! [`Stopwords::load`], which reads a list before any scoring starts.

pub mod segment;
pub mod stopwords;
pub mod tokenize;

pub use segment::{normalize, sentences};
pub use stopwords::Stopwords;
pub use tokenize::tokens;
