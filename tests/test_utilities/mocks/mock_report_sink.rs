use sbom_notice::prelude::*;
use sbom_notice::shared::error::SbomError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ReportSink that keeps written reports in memory
#[derive(Default, Clone)]
pub struct MockReportSink {
    pub notices: Arc<Mutex<Vec<(PathBuf, String)>>>,
    pub tables: Arc<Mutex<Vec<(PathBuf, Vec<MatchRow>)>>>,
    fail_writes: bool,
}

impl MockReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write fails as if the target were not writable
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn written_notices(&self) -> Vec<(PathBuf, String)> {
        self.notices.lock().unwrap().clone()
    }

    pub fn written_tables(&self) -> Vec<(PathBuf, Vec<MatchRow>)> {
        self.tables.lock().unwrap().clone()
    }

    fn check_writable(&self, path: &Path) -> Result<()> {
        if self.fail_writes {
            return Err(SbomError::FileWriteError {
                path: path.to_path_buf(),
                details: "Permission denied".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl ReportSink for MockReportSink {
    fn write_notice(&self, path: &Path, content: &str) -> Result<()> {
        self.check_writable(path)?;
        self.notices
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }

    fn write_match_table(&self, path: &Path, rows: &[MatchRow]) -> Result<()> {
        self.check_writable(path)?;
        self.tables
            .lock()
            .unwrap()
            .push((path.to_path_buf(), rows.to_vec()));
        Ok(())
    }
}
