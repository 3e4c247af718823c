use std::path::{Path, PathBuf};

/// One component whose name matched the search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub source_file: String,
    pub component_name: String,
    pub component_version: String,
    pub component_type: String,
}

/// Matches found in a single document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMatches {
    pub rows: Vec<MatchRow>,
}

impl DocumentMatches {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// A document that was skipped and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Running totals of a batch search.
///
/// Owned by the caller and updated once per document; nothing about a batch
/// is kept anywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSummary {
    overall_count: usize,
    files_processed: usize,
    rows: Vec<MatchRow>,
    skipped: Vec<SkippedFile>,
}

impl SearchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the matches of a document that loaded and validated
    pub fn record_document(&mut self, matches: DocumentMatches) {
        self.files_processed += 1;
        self.overall_count += matches.count();
        self.rows.extend(matches.rows);
    }

    /// Records a document that failed to load or validate
    pub fn record_skipped(&mut self, path: &Path, reason: String) {
        self.skipped.push(SkippedFile {
            path: path.to_path_buf(),
            reason,
        });
    }

    /// Total matches across every processed document
    pub fn overall_count(&self) -> usize {
        self.overall_count
    }

    /// Documents that passed loading and validation
    pub fn files_processed(&self) -> usize {
        self.files_processed
    }

    pub fn rows(&self) -> &[MatchRow] {
        &self.rows
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }
}
