use crate::ports::outbound::ReportSink;
use crate::sbom_processing::domain::MatchRow;
use crate::shared::error::SbomError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Header row of the exported match table
pub const MATCH_TABLE_HEADER: [&str; 4] = [
    "SBOM FILE",
    "COMPONENT NAME",
    "COMPONENT VERSION",
    "COMPONENT TYPE",
];

/// FileSystemWriter adapter for writing reports to files
///
/// This adapter implements the ReportSink port: the notice as one buffered
/// write, the match table through a `csv::Writer`.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(SbomError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    fn write_error(path: &Path, details: impl ToString) -> anyhow::Error {
        SbomError::FileWriteError {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
        .into()
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for FileSystemWriter {
    fn write_notice(&self, path: &Path, content: &str) -> Result<()> {
        Self::validate_parent_directory(path)?;
        validate_not_symlink(path)?;

        fs::write(path, content).map_err(|e| Self::write_error(path, e))
    }

    fn write_match_table(&self, path: &Path, rows: &[MatchRow]) -> Result<()> {
        Self::validate_parent_directory(path)?;
        validate_not_symlink(path)?;

        let mut writer = csv::Writer::from_path(path).map_err(|e| Self::write_error(path, e))?;
        writer
            .write_record(MATCH_TABLE_HEADER)
            .map_err(|e| Self::write_error(path, e))?;
        for row in rows {
            writer
                .write_record([
                    row.source_file.as_str(),
                    row.component_name.as_str(),
                    row.component_version.as_str(),
                    row.component_type.as_str(),
                ])
                .map_err(|e| Self::write_error(path, e))?;
        }
        writer.flush().map_err(|e| Self::write_error(path, e))?;

        Ok(())
    }
}
