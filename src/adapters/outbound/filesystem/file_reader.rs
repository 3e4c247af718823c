use crate::ports::outbound::SbomReader;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the files `ALL` selects
const JSON_EXTENSION: &str = "json";

/// FileSystemReader adapter for reading SBOM files from the file system
///
/// This adapter implements the SbomReader port, rejecting symbolic links,
/// non-regular files and oversized files before reading.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        let file_size = validate_regular_file(path)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn list_json_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| SbomError::FileReadError {
            path: dir.to_path_buf(),
            details: format!("Failed to list directory: {}", e),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SbomError::FileReadError {
                path: dir.to_path_buf(),
                details: format!("Failed to list directory: {}", e),
            })?;
            let path = entry.path();
            let is_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(JSON_EXTENSION));
            if is_json && path.is_file() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}
