use sbom_notice::prelude::*;
use sbom_notice::shared::error::SbomError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock SbomReader serving in-memory files
///
/// Paths not registered with `with_file` behave like missing files.
#[derive(Default, Clone)]
pub struct MockSbomReader {
    files: BTreeMap<PathBuf, Vec<u8>>,
    pub reads: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockSbomReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files
            .insert(PathBuf::from(path), content.as_bytes().to_vec());
        self
    }

    pub fn with_bytes(mut self, path: &str, content: &[u8]) -> Self {
        self.files.insert(PathBuf::from(path), content.to_vec());
        self
    }

    pub fn read_paths(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.files.get(path).cloned().ok_or_else(|| {
            SbomError::SbomNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn list_json_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| {
                p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            })
            .cloned()
            .collect())
    }
}
