use crate::sbom_processing::domain::MatchRow;
use crate::shared::Result;
use std::path::Path;

/// ReportSink port for persisting generated reports
///
/// This port abstracts the output destination of both tasks: the notice
/// text file and the CSV match table.
pub trait ReportSink {
    /// Writes the notice, replacing any existing file at `path`
    ///
    /// # Errors
    /// Returns `SbomError::FileWriteError` if the file cannot be written
    fn write_notice(&self, path: &Path, content: &str) -> Result<()>;

    /// Writes the header row followed by one row per match
    ///
    /// # Errors
    /// Returns `SbomError::FileWriteError` if the file cannot be opened or
    /// written (e.g. permission denied, file locked by another program)
    fn write_match_table(&self, path: &Path, rows: &[MatchRow]) -> Result<()>;
}
