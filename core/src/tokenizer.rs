use crate::segment::Segmenter;
use crate::stopword::StopwordFilter;
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref PUNCTUATION: Regex = Regex::new(r"^[[:punct:]]+$").expect("valid regex");
}

/// Turns raw text into normalized terms: NFKC + lowercase, segmentation,
/// whitespace trimming, punctuation and stopword removal.
pub struct Tokenizer {
    segmenter: Box<dyn Segmenter>,
    stopwords: StopwordFilter,
}

impl Tokenizer {
    pub fn new(segmenter: Box<dyn Segmenter>, stopwords: StopwordFilter) -> Self {
        Self { segmenter, stopwords }
    }

    /// Segmentation order is preserved and duplicates are kept; postings
    /// deduplicate later. Empty or whitespace-only input yields no terms.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        self.segmenter
            .segment(&normalized)
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| !PUNCTUATION.is_match(s))
            .filter(|s| !self.stopwords.is_stopword(s))
            .collect()
    }
}
