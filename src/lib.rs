//! Deterministic TF-IDF extractive summarizer.
//!
//! `summer` splits a document into sentences, tokenizes them, accumulates
//! corpus-wide token statistics and ranks every sentence by the sum of its
//! tokens' TF-IDF values. The top sentences are returned in document order.
//! Identical inputs always produce identical summaries.
//!
//! ```
//! use summer::config::SummaryConfig;
//! use summer::selection::Summarizer;
//!
//! let summarizer = Summarizer::new(SummaryConfig::default().with_num_sentences(1));
//! let result = summarizer.summarize("Cats are mammals. Dogs are mammals too. The sky is blue.", None);
//! assert_eq!(result.sentences.len(), 1);
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod input;
pub mod selection;
pub mod text;
pub mod types;

pub use error::{Result, SummaryError};
