use crate::index::{Document, Hit, InvertedIndex};
use crate::tokenizer::Tokenizer;
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Supplies the full current document set on demand. The engine does not
/// know or care how documents are parsed or stored.
pub trait DocumentSource: Send + Sync {
    fn load(&self) -> Result<Vec<Document>>;
}

/// Owns the published index generation and rebuilds it wholesale.
///
/// Searches clone the `Arc` out of the lock once at call start, so an
/// in-flight search runs entirely against one generation even while a
/// rebuild publishes the next.
pub struct SearchEngine {
    tokenizer: Arc<Tokenizer>,
    source: Box<dyn DocumentSource>,
    published: RwLock<Arc<InvertedIndex>>,
}

impl SearchEngine {
    /// Starts with an empty published generation, so the query surface is
    /// usable before the first rebuild completes.
    pub fn new(tokenizer: Arc<Tokenizer>, source: Box<dyn DocumentSource>) -> Self {
        let empty = Arc::new(InvertedIndex::new(tokenizer.clone()));
        Self {
            tokenizer,
            source,
            published: RwLock::new(empty),
        }
    }

    pub fn search(&self, query: &str) -> Vec<Hit> {
        self.current().search(query)
    }

    /// The currently published generation.
    pub fn current(&self) -> Arc<InvertedIndex> {
        self.published.read().clone()
    }

    /// Build a fresh generation from the document source and publish it.
    ///
    /// A source failure aborts the build and leaves the previous generation
    /// serving; the swap only happens once the new generation is complete.
    pub fn rebuild(&self) -> Result<()> {
        let docs = self.source.load()?;
        let loaded = docs.len();
        let mut index = InvertedIndex::new(self.tokenizer.clone());
        for doc in docs {
            index.update(doc);
        }
        tracing::info!(
            loaded,
            docs = index.doc_count(),
            terms = index.term_count(),
            postings = index.posting_count(),
            "publishing new index generation"
        );
        *self.published.write() = Arc::new(index);
        Ok(())
    }
}
