// The full comparison pipeline: index both documents, match, score.
//
// Runs twice per document pair, once over unique vocabulary and once
// word-weighted, producing two independent mode reports.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::index::{DocumentIndex, Representation};
use crate::scoring::conformity;

/// The outcome of one matching mode.
#[derive(Debug, Clone, Serialize)]
pub struct ModeReport {
    /// Number of significant words matching between the documents.
    pub matches: usize,
    /// Canonical words in the first document (unique or occurrences,
    /// depending on the mode).
    pub first_words: usize,
    pub second_words: usize,
    /// Degree of conformity, 0 to 100.
    pub conformity: f64,
    /// The intersected vocabulary, lexical order. Unique-word mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_words: Option<Vec<String>>,
}

/// Both mode reports for one pair of documents.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub first: String,
    pub second: String,
    /// Unique-word comparison — repeated words count once.
    pub unique: ModeReport,
    /// Word-weighted comparison — every occurrence counts.
    pub weighted: ModeReport,
}

/// Compare two documents on disk and produce both mode reports.
///
/// Either file failing to open or read is fatal; nothing is reported for
/// a pair that cannot be fully indexed.
pub fn compare(first: &Path, second: &Path) -> Result<ComparisonReport> {
    info!(
        first = %first.display(),
        second = %second.display(),
        "comparing documents"
    );

    let unique = run_mode(first, second, Representation::Set)?;
    let weighted = run_mode(first, second, Representation::Weighted)?;

    Ok(ComparisonReport {
        first: first.display().to_string(),
        second: second.display().to_string(),
        unique,
        weighted,
    })
}

fn run_mode(first: &Path, second: &Path, representation: Representation) -> Result<ModeReport> {
    let first_index = DocumentIndex::from_path(first, representation)?;
    let second_index = DocumentIndex::from_path(second, representation)?;

    let matches = first_index.matches(&second_index);
    let shared_words = first_index.shared_words(&second_index);

    Ok(ModeReport {
        matches,
        first_words: first_index.len(),
        second_words: second_index.len(),
        conformity: conformity(first_index.len(), second_index.len(), matches),
        shared_words,
    })
}
