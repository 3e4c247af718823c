use crate::sbom_processing::domain::SearchSummary;
use std::path::PathBuf;

/// What happened to the optional CSV export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No CSV path was requested
    NotRequested,
    /// A path was requested but there was nothing to export
    NoMatches,
    /// The table was written
    Written(PathBuf),
    /// Writing failed; the console results are still valid
    Failed { path: PathBuf, reason: String },
}

/// SearchResponse - Internal response DTO from the search use case
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub summary: SearchSummary,
    pub export: ExportOutcome,
}

impl SearchResponse {
    pub fn new(summary: SearchSummary, export: ExportOutcome) -> Self {
        Self { summary, export }
    }
}
