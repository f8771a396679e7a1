pub mod engine;
pub mod index;
pub mod segment;
pub mod stopword;
pub mod tokenizer;

pub use engine::{DocumentSource, SearchEngine};
pub use index::{DocId, Document, Field, Hit, InvertedIndex, TermId};
pub use segment::{Segmenter, UnicodeSegmenter};
pub use stopword::StopwordFilter;
pub use tokenizer::Tokenizer;
