pub mod identifiers;
pub mod summary;

pub use identifiers::{SequenceIndex, SourceVersion};
pub use summary::{ScoredSentence, SummaryMetadata, SummaryResult, SummarySentence};
