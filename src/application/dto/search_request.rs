use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// Selector value that expands to every `*.json` file in the working directory
pub const ALL_FILES_SELECTOR: &str = "ALL";

/// Which SBOM files a search covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelector {
    /// Every `*.json` file in the working directory
    AllJson,
    /// A single file
    Path(PathBuf),
}

impl FileSelector {
    /// Interprets a command-line value; `ALL` is the only special value
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed == ALL_FILES_SELECTOR {
            FileSelector::AllJson
        } else {
            FileSelector::Path(PathBuf::from(trimmed))
        }
    }
}

/// SearchRequest - Internal request DTO for the component search use case
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Files to search, in the order given
    pub selectors: Vec<FileSelector>,
    /// Name fragment to look for (trimmed, never empty)
    pub term: String,
    /// Where to export matches as CSV, if anywhere
    pub csv_output: Option<PathBuf>,
    /// Directory `ALL` expands against
    pub working_dir: PathBuf,
}

impl SearchRequest {
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }
}

/// Builder for `SearchRequest`
#[derive(Debug, Default)]
pub struct SearchRequestBuilder {
    selectors: Vec<FileSelector>,
    term: Option<String>,
    csv_output: Option<PathBuf>,
    working_dir: Option<PathBuf>,
}

impl SearchRequestBuilder {
    pub fn selector(mut self, selector: FileSelector) -> Self {
        self.selectors.push(selector);
        self
    }

    pub fn selectors(mut self, selectors: impl IntoIterator<Item = FileSelector>) -> Self {
        self.selectors.extend(selectors);
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn csv_output(mut self, path: Option<PathBuf>) -> Self {
        self.csv_output = path;
        self
    }

    pub fn working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Validates and builds the request
    ///
    /// # Errors
    /// Returns `SbomError::Validation` when no file is selected or the term
    /// is empty after trimming
    pub fn build(self) -> Result<SearchRequest> {
        if self.selectors.is_empty() {
            return Err(SbomError::Validation {
                message: "At least one SBOM file (or ALL) must be selected".to_string(),
            }
            .into());
        }

        let term = self.term.unwrap_or_default().trim().to_string();
        if term.is_empty() {
            return Err(SbomError::Validation {
                message: "The component search term must not be empty".to_string(),
            }
            .into());
        }

        Ok(SearchRequest {
            selectors: self.selectors,
            term,
            csv_output: self.csv_output,
            working_dir: self.working_dir.unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}
