use unicode_segmentation::UnicodeSegmentation;

/// Splits raw text into candidate substrings. The index and ranking logic
/// never segment text themselves; any implementation can be swapped in,
/// which is how tests get deterministic token streams.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Default segmenter backed by Unicode word boundaries (UAX #29).
///
/// Boundary splitting keeps punctuation and whitespace runs as their own
/// segments; the tokenizer pipeline filters those out afterwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_word_bounds().map(|s| s.to_string()).collect()
    }
}
