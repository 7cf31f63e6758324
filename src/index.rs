// Document indexing — reads a document into one of the two index
// representations the matchers operate on.
//
// The Set form deduplicates, so repeated words count once; the Weighted
// form keeps every surviving occurrence in first-encountered order, so
// repeated words weight the match.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::normalize::normalize;

/// Which index form to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Unique canonical words only.
    Set,
    /// Every surviving occurrence, duplicates retained.
    Weighted,
}

/// The canonical words of one document.
#[derive(Debug, Clone)]
pub enum DocumentIndex {
    /// Ordered set, so vocabulary listings print deterministically.
    Set(BTreeSet<String>),
    Weighted(Vec<String>),
}

impl DocumentIndex {
    /// Build an index from document lines: split each line on whitespace,
    /// normalize every word, keep what survives.
    pub fn build<I, S>(lines: I, representation: Representation) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines.into_iter().flat_map(|line| {
            line.as_ref()
                .split_whitespace()
                .map(normalize)
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
        });
        match representation {
            Representation::Set => Self::Set(words.collect()),
            Representation::Weighted => Self::Weighted(words.collect()),
        }
    }

    /// Read and index a document from disk.
    ///
    /// A missing or unreadable file is a fatal input error reported to the
    /// caller; no recovery is attempted.
    pub fn from_path(path: &Path, representation: Representation) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("cannot open document {}", path.display()))?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .with_context(|| format!("cannot read document {}", path.display()))?;

        let index = Self::build(&lines, representation);
        debug!(
            path = %path.display(),
            words = index.len(),
            representation = ?representation,
            "indexed document"
        );
        Ok(index)
    }

    /// Number of canonical words in the index: unique words for Set,
    /// occurrences for Weighted.
    pub fn len(&self) -> usize {
        match self {
            Self::Set(words) => words.len(),
            Self::Weighted(words) => words.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
