use anyhow::{Context, Result};
use faqdex_core::{Document, DocumentSource};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Document source over a directory of org-style FAQ note files.
///
/// A line starting with `*` opens a question; the lines below it, up to the
/// next heading, are its answer. Lines before the first heading are ignored.
pub struct NotesDirSource {
    root: PathBuf,
}

impl NotesDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for NotesDirSource {
    fn load(&self) -> Result<Vec<Document>> {
        let mut docs = Vec::new();
        let mut files = 0usize;
        for entry in WalkDir::new(&self.root) {
            let entry =
                entry.with_context(|| format!("walking notes dir {}", self.root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading note file {}", path.display()))?;
            docs.extend(parse_note_file(&content, &path.to_string_lossy()));
            files += 1;
        }
        tracing::debug!(files, docs = docs.len(), "loaded note files");
        Ok(docs)
    }
}

/// Split one note file into question/answer documents, keeping the 1-based
/// line number of each question for provenance.
pub fn parse_note_file(content: &str, path: &str) -> Vec<Document> {
    let mut docs = Vec::new();
    let mut question: Option<(String, u32)> = None;
    let mut answer: Vec<&str> = Vec::new();

    let mut flush = |question: &mut Option<(String, u32)>, answer: &mut Vec<&str>| {
        if let Some((q, line)) = question.take() {
            docs.push(Document {
                question: q,
                answer: answer.join("\n"),
                path: path.to_string(),
                question_line: line,
            });
        }
        answer.clear();
    };

    for (i, line) in content.lines().enumerate() {
        if line.starts_with('*') {
            flush(&mut question, &mut answer);
            question = Some((line.to_string(), (i + 1) as u32));
        } else if question.is_some() {
            answer.push(line);
        }
    }
    flush(&mut question, &mut answer);
    docs
}
