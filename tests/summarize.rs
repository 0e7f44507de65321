use summer::config::SummaryConfig;
use summer::corpus::{Corpus, Scorer, TermWeights};
use summer::selection::Summarizer;
use summer::text::Stopwords;
use summer::types::SummaryResult;

const ANIMALS: &str = "Cats are mammals. Dogs are mammals too. The sky is blue.";

const ARTICLE: &str = "Rust is a systems programming language. \
    Rust guarantees memory safety without a garbage collector. \
    The borrow checker enforces ownership rules at compile time. \
    Many developers enjoy the compiler messages. \
    Ownership and borrowing make memory safety possible. \
    The weather today is sunny.";

fn texts(result: &SummaryResult) -> Vec<&str> {
    result.sentences.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn summary_picks_highest_scoring_sentence() {
    let summarizer = Summarizer::new(SummaryConfig::default().with_num_sentences(1));
    let result = summarizer.summarize(ANIMALS, None);

    // Every token of the last sentence occurs exactly once in the corpus.
    assert_eq!(texts(&result), vec!["The sky is blue."]);
    assert_eq!(result.summary.sentences_considered, 3);
    assert_eq!(result.summary.sentences_selected, 1);
    assert_eq!(result.summary.requested, 1);
}

#[test]
fn summary_is_in_document_order() {
    let summarizer = Summarizer::new(SummaryConfig::default().with_num_sentences(3));
    let result = summarizer.summarize(ARTICLE, None);

    assert_eq!(result.sentences.len(), 3);
    let indices: Vec<usize> = result.sentences.iter().map(|s| s.index.get()).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted);

    let positions: Vec<usize> = result
        .sentences
        .iter()
        .map(|s| ARTICLE.find(&s.text).expect("sentence comes from the source"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn zero_or_oversized_request_returns_everything() {
    let everything = Summarizer::new(SummaryConfig::all()).summarize(ARTICLE, None);
    let oversized = Summarizer::new(SummaryConfig::default().with_num_sentences(100))
        .summarize(ARTICLE, None);

    assert_eq!(everything.sentences.len(), 6);
    assert_eq!(texts(&everything), texts(&oversized));
    assert_eq!(everything.sentences[0].text, "Rust is a systems programming language.");
    assert_eq!(everything.sentences[5].text, "The weather today is sunny.");
}

#[test]
fn negative_count_means_all() {
    assert_eq!(SummaryConfig::from_count(-3), SummaryConfig::all());
    assert_eq!(SummaryConfig::from_count(0), SummaryConfig::all());
    assert_eq!(SummaryConfig::from_count(2).num_sentences, 2);
    assert_eq!(SummaryConfig::default().num_sentences, 5);
}

#[test]
fn stopwords_change_the_summary_metadata() {
    let summarizer = Summarizer::new(SummaryConfig::all());
    let plain = summarizer.summarize(ANIMALS, None);
    let filtered = summarizer.summarize(ANIMALS, Some(Stopwords::parse("is are the too")));

    assert_eq!(plain.summary.total_tokens, 11);
    assert_eq!(filtered.summary.total_tokens, 6);
    assert_eq!(plain.summary.source_version, filtered.summary.source_version);
    assert_ne!(plain.sentences, filtered.sentences);
}

#[test]
fn empty_text_gives_empty_summary() {
    let result = Summarizer::default().summarize("   \n\n ", None);
    assert!(result.sentences.is_empty());
    assert_eq!(result.summary.sentences_considered, 0);
    assert_eq!(result.to_text(), "");
}

#[test]
fn text_without_boundaries_is_one_sentence() {
    let result = Summarizer::default().summarize("just a fragment\nwith no   ending", None);
    assert_eq!(texts(&result), vec!["just a fragment with no ending"]);
}

#[test]
fn fully_stopworded_text_still_summarizes() {
    let summarizer = Summarizer::new(SummaryConfig::default().with_num_sentences(2));
    let result = summarizer.summarize(ANIMALS, Some(Stopwords::parse(
        "cats are mammals dogs too the sky is blue",
    )));

    assert_eq!(result.summary.total_tokens, 0);
    assert_eq!(result.sentences.len(), 2);
    assert!(result.sentences.iter().all(|s| s.score == 0.0));
    assert_eq!(texts(&result), vec!["Cats are mammals.", "Dogs are mammals too."]);
}

#[test]
fn to_text_prints_one_sentence_per_line() {
    let result = Summarizer::new(SummaryConfig::all()).summarize(ANIMALS, None);
    assert_eq!(
        result.to_text(),
        "Cats are mammals.\nDogs are mammals too.\nThe sky is blue.\n"
    );
}

struct UniformScorer;

impl Scorer for UniformScorer {
    fn term_weights(&self, corpus: &Corpus) -> TermWeights {
        TermWeights::new(corpus.token_counts().keys().map(|t| (t.clone(), 1.0)).collect())
    }
}

#[test]
fn custom_scorer_drives_the_summary() {
    let config = SummaryConfig::default().with_num_sentences(1);
    let summarizer = Summarizer::with_scorer(UniformScorer, config.clone());
    assert_eq!(summarizer.config(), &config);

    // Longest sentence wins when every token weighs the same.
    let result = summarizer.summarize(ANIMALS, None);
    assert_eq!(texts(&result), vec!["Dogs are mammals too."]);
    assert_eq!(result.sentences[0].score, 4.0);
}
