use crate::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub type TermId = u32;
pub type DocId = u32;

/// The indexed fields of a document. Build and search both walk fields in
/// `ALL` order so scoring encounter order is reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Question,
    Answer,
    Path,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Question, Field::Answer, Field::Path];
}

/// One question/answer note plus its provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub question: String,
    pub answer: String,
    pub path: String,
    /// 1-based line number of the question within its source file.
    pub question_line: u32,
}

impl Document {
    fn content(&self, field: Field) -> &str {
        match field {
            Field::Question => &self.question,
            Field::Answer => &self.answer,
            Field::Path => &self.path,
        }
    }
}

/// A ranked search result.
#[derive(Debug, Clone, Serialize)]
pub struct Hit {
    #[serde(flatten)]
    pub document: Document,
    /// Number of (field, term) posting matches. Presence-based, not
    /// frequency-based; the same term hitting two fields counts twice.
    pub score: u32,
}

/// One index generation: document store, vocabulary, and postings.
///
/// A generation is populated through `update` during a single build pass,
/// then published behind an `Arc` and never mutated again; concurrent
/// `search` calls need no synchronization.
pub struct InvertedIndex {
    tokenizer: Arc<Tokenizer>,
    docs: Vec<Document>,
    doc_ids: HashMap<String, DocId>,
    terms: Vec<String>,
    term_ids: HashMap<String, TermId>,
    /// Posting lists keyed by (field, term), doc ids in first-seen order.
    postings: HashMap<(Field, TermId), Vec<DocId>>,
    seen: HashSet<(Field, TermId, DocId)>,
}

impl InvertedIndex {
    pub fn new(tokenizer: Arc<Tokenizer>) -> Self {
        Self {
            tokenizer,
            docs: Vec::new(),
            doc_ids: HashMap::new(),
            terms: Vec::new(),
            term_ids: HashMap::new(),
            postings: HashMap::new(),
            seen: HashSet::new(),
        }
    }

    /// Add one document to the in-progress generation.
    ///
    /// Document identity is the exact question text: a repeated question
    /// reuses the existing id and refreshes the stored answer/path (last
    /// writer wins). Re-indexing byte-identical content is a no-op.
    /// Documents without a question are skipped; the build pass goes on.
    pub fn update(&mut self, doc: Document) {
        if doc.question.trim().is_empty() {
            tracing::warn!(path = %doc.path, line = doc.question_line, "skipping document with empty question");
            return;
        }
        let doc_id = self.find_or_allocate_doc_id(doc);
        for field in Field::ALL {
            let terms = self.tokenizer.tokenize(self.docs[doc_id as usize].content(field));
            for term in terms {
                let term_id = self.find_or_allocate_term_id(term);
                self.save_posting(field, term_id, doc_id);
            }
        }
    }

    /// Rank documents matching the query, best first.
    ///
    /// The query's terms are generalized against the vocabulary by literal
    /// prefix, so segmentation of indexed content that glued a compound
    /// together (e.g. "copy-to") is still reachable from its head ("copy").
    /// Each posting hit adds one point; ties keep first-matched order.
    pub fn search(&self, query: &str) -> Vec<Hit> {
        let query_terms = self.tokenizer.tokenize(query);
        let targets = self.generalize(&query_terms);

        let mut scores: HashMap<DocId, u32> = HashMap::new();
        let mut order: Vec<DocId> = Vec::new();
        for field in Field::ALL {
            for &term_id in &targets {
                let Some(list) = self.postings.get(&(field, term_id)) else {
                    continue;
                };
                for &doc_id in list {
                    match scores.entry(doc_id) {
                        std::collections::hash_map::Entry::Occupied(mut e) => *e.get_mut() += 1,
                        std::collections::hash_map::Entry::Vacant(e) => {
                            e.insert(1);
                            order.push(doc_id);
                        }
                    }
                }
            }
        }

        // Stable sort over first-encounter order keeps ties deterministic.
        order.sort_by(|a, b| scores[b].cmp(&scores[a]));
        order
            .into_iter()
            .map(|doc_id| Hit {
                document: self.docs[doc_id as usize].clone(),
                score: scores[&doc_id],
            })
            .collect()
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn posting_count(&self) -> usize {
        self.seen.len()
    }

    /// Vocabulary terms (in term-id order) that equal a query term or have
    /// one as a prefix. Empty query terms generalize to nothing.
    fn generalize(&self, query_terms: &[String]) -> Vec<TermId> {
        if query_terms.is_empty() {
            return Vec::new();
        }
        self.terms
            .iter()
            .enumerate()
            .filter(|(_, term)| query_terms.iter().any(|q| term.starts_with(q.as_str())))
            .map(|(id, _)| id as TermId)
            .collect()
    }

    fn find_or_allocate_doc_id(&mut self, doc: Document) -> DocId {
        if let Some(&id) = self.doc_ids.get(&doc.question) {
            self.docs[id as usize] = doc;
            return id;
        }
        let id = self.docs.len() as DocId;
        self.doc_ids.insert(doc.question.clone(), id);
        self.docs.push(doc);
        id
    }

    fn find_or_allocate_term_id(&mut self, term: String) -> TermId {
        if let Some(&id) = self.term_ids.get(&term) {
            return id;
        }
        let id = self.terms.len() as TermId;
        self.term_ids.insert(term.clone(), id);
        self.terms.push(term);
        id
    }

    fn save_posting(&mut self, field: Field, term_id: TermId, doc_id: DocId) {
        if self.seen.insert((field, term_id, doc_id)) {
            self.postings.entry((field, term_id)).or_default().push(doc_id);
        }
    }
}
