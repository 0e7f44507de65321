use crate::types::summary::ScoredSentence;

/// Keep the `n` best sentences of a ranking and put them back in document
/// order. `n == 0`, or `n` past the end, keeps everything.
pub fn select_top<'a>(mut ranked: Vec<ScoredSentence<'a>>, n: usize) -> Vec<ScoredSentence<'a>> {
    if n > 0 {
        ranked.truncate(n);
    }
    ranked.sort_by_key(|s| s.sentence.index());
    ranked
}
