use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SbomReader port for reading local SBOM files
///
/// This port abstracts the file system operations the loader needs:
/// reading one file and listing the JSON files of a directory.
pub trait SbomReader {
    /// Reads the raw bytes of an SBOM file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist (`SbomError::SbomNotFound`)
    /// - The path is not a readable regular file
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>>;

    /// Lists every file with a `.json` extension directly inside `dir`,
    /// sorted by file name
    fn list_json_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}
