use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Membership filter over a fixed list of ignorable terms, one per line.
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    /// Load the list from a file. A missing or unreadable file is an error;
    /// callers treat it as fatal at startup.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening stopword list {}", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("reading stopword list {}", path.display()))
    }

    /// Load the list from any byte source. Blank lines are skipped and
    /// surrounding whitespace is trimmed off each entry.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        Ok(Self { words })
    }

    pub fn is_stopword(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
