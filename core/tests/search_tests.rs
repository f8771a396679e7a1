use faqdex_core::{Document, InvertedIndex, Segmenter, StopwordFilter, Tokenizer};
use std::sync::Arc;

/// Splits on whitespace only, so compounds like "copy-to" stay one term.
struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|s| s.to_string()).collect()
    }
}

fn tokenizer(stopwords: &str) -> Arc<Tokenizer> {
    Arc::new(Tokenizer::new(
        Box::new(WhitespaceSegmenter),
        StopwordFilter::from_reader(stopwords.as_bytes()).unwrap(),
    ))
}

fn doc(question: &str, answer: &str, path: &str) -> Document {
    Document {
        question: question.to_string(),
        answer: answer.to_string(),
        path: path.to_string(),
        question_line: 1,
    }
}

#[test]
fn update_is_idempotent() {
    let mut index = InvertedIndex::new(tokenizer(""));
    let d = doc("how to configure git", "set user.email in gitconfig", "notes/git.org");
    index.update(d.clone());
    let postings = index.posting_count();
    let terms = index.term_count();
    index.update(d);
    assert_eq!(index.doc_count(), 1);
    assert_eq!(index.posting_count(), postings);
    assert_eq!(index.term_count(), terms);
}

#[test]
fn search_is_deterministic() {
    let mut index = InvertedIndex::new(tokenizer(""));
    index.update(doc("git rebase", "rewrite history with git", "a.org"));
    index.update(doc("git bisect", "binary search over commits", "b.org"));
    index.update(doc("encoding woes", "convert with iconv", "c.org"));

    let first = index.search("git commits");
    let second = index.search("git commits");
    let summary = |hits: &[faqdex_core::Hit]| {
        hits.iter()
            .map(|h| (h.document.question.clone(), h.score))
            .collect::<Vec<_>>()
    };
    assert_eq!(summary(&first), summary(&second));
    assert!(!first.is_empty());
}

#[test]
fn prefix_generalization_recovers_compound_terms() {
    let mut index = InvertedIndex::new(tokenizer(""));
    index.update(doc("clipboard shortcuts", "use copy-to for the register", "emacs.org"));
    let hits = index.search("copy");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document.question, "clipboard shortcuts");
}

#[test]
fn same_term_across_fields_scores_per_field() {
    let mut index = InvertedIndex::new(tokenizer(""));
    index.update(doc("git tips", "aliases save typing", "a.org"));
    index.update(doc("git tricks", "git magic explained", "b.org"));

    let hits = index.search("git");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].document.question, "git tricks");
    assert_eq!(hits[0].score, 2);
    assert_eq!(hits[1].document.question, "git tips");
    assert_eq!(hits[1].score, 1);
}

#[test]
fn empty_queries_return_nothing() {
    let mut index = InvertedIndex::new(tokenizer(""));
    index.update(doc("git tips", "aliases", "a.org"));
    assert!(index.search("").is_empty());
    assert!(index.search("   ").is_empty());
    assert!(index.search("unrelatedword").is_empty());
}

#[test]
fn identical_questions_collapse_to_one_document() {
    let mut index = InvertedIndex::new(tokenizer(""));
    index.update(doc("how to exit vim", "press q", "old.org"));
    index.update(doc("how to exit vim", "press escape then :wq", "new.org"));

    assert_eq!(index.doc_count(), 1);
    let hits = index.search("vim");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document.answer, "press escape then :wq");
    assert_eq!(hits[0].document.path, "new.org");
}

#[test]
fn documents_without_a_question_are_skipped() {
    let mut index = InvertedIndex::new(tokenizer(""));
    index.update(doc("", "orphaned answer text", "a.org"));
    index.update(doc("   ", "another orphan", "b.org"));
    index.update(doc("real question", "real answer", "c.org"));
    assert_eq!(index.doc_count(), 1);
    assert!(index.search("orphaned").is_empty());
}

#[test]
fn two_note_corpus_end_to_end() {
    let mut index = InvertedIndex::new(tokenizer("how\nto"));
    index.update(doc("How to configure git", "", "a.org"));
    index.update(doc("How to fix encoding", "", "b.org"));

    let hits = index.search("git encoding");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].document.question, "How to configure git");
    assert_eq!(hits[0].score, 1);
    assert_eq!(hits[1].document.question, "How to fix encoding");
    assert_eq!(hits[1].score, 1);
}
