use std::path::PathBuf;

/// NoticeResponse - Internal response DTO from the notice generation use case
#[derive(Debug, Clone)]
pub struct NoticeResponse {
    /// `<app>_notice.txt`
    pub filename: String,
    /// Full path the notice was written to
    pub output_path: PathBuf,
    /// Number of library components listed
    pub component_count: usize,
}

impl NoticeResponse {
    pub fn new(filename: String, output_path: PathBuf, component_count: usize) -> Self {
        Self {
            filename,
            output_path,
            component_count,
        }
    }
}
