use std::path::PathBuf;

/// Where the SBOM for a notice comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeSource {
    /// Application name to look up in the SCA service
    Application(String),
    /// Local CycloneDX JSON file
    SbomFile(PathBuf),
}

/// NoticeRequest - Internal request DTO for the notice generation use case
#[derive(Debug, Clone)]
pub struct NoticeRequest {
    pub source: NoticeSource,
    /// Directory the notice file is written to
    pub output_dir: PathBuf,
}

impl NoticeRequest {
    pub fn new(source: NoticeSource, output_dir: PathBuf) -> Self {
        Self { source, output_dir }
    }

    /// Request for an application in the SCA service; the name is trimmed
    pub fn from_application(app_name: &str, output_dir: PathBuf) -> Self {
        Self::new(
            NoticeSource::Application(app_name.trim().to_string()),
            output_dir,
        )
    }

    /// Request for a local SBOM file; the path is trimmed
    pub fn from_sbom_file(path: &str, output_dir: PathBuf) -> Self {
        Self::new(NoticeSource::SbomFile(PathBuf::from(path.trim())), output_dir)
    }
}
