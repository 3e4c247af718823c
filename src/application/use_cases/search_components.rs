use crate::application::dto::{ExportOutcome, FileSelector, SearchRequest, SearchResponse};
use crate::ports::outbound::{ProgressReporter, ReportSink, SbomReader};
use crate::sbom_processing::domain::{DocumentMatches, SearchSummary};
use crate::sbom_processing::services::{ComponentSearch, FormatValidator, SbomLoader};
use crate::shared::Result;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// SearchComponentsUseCase - searches one or more SBOMs for components by name
///
/// Files are processed one after another. A file that cannot be loaded or
/// validated is reported and skipped; it never stops the batch.
///
/// # Type Parameters
/// * `R` - SbomReader implementation
/// * `S` - ReportSink implementation (CSV export)
/// * `PR` - ProgressReporter implementation
pub struct SearchComponentsUseCase<R, S, PR> {
    sbom_reader: R,
    report_sink: S,
    progress_reporter: PR,
}

impl<R, S, PR> SearchComponentsUseCase<R, S, PR>
where
    R: SbomReader,
    S: ReportSink,
    PR: ProgressReporter,
{
    /// Creates a new SearchComponentsUseCase with injected dependencies
    pub fn new(sbom_reader: R, report_sink: S, progress_reporter: PR) -> Self {
        Self {
            sbom_reader,
            report_sink,
            progress_reporter,
        }
    }

    /// Executes the search
    ///
    /// # Errors
    /// Only fails when the file selection itself cannot be resolved (e.g. the
    /// working directory cannot be listed for `ALL`). Per-file failures end up
    /// in `SearchSummary::skipped`, export failures in `ExportOutcome::Failed`.
    pub fn execute(&self, request: SearchRequest) -> Result<SearchResponse> {
        let files = self.resolve_files(&request)?;
        if files.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: No SBOM files matched the selection.");
        }

        let search = ComponentSearch::new(&request.term);
        let mut summary = SearchSummary::new();
        let total = files.len();

        for (index, path) in files.iter().enumerate() {
            let label = Self::source_label(path, &request.working_dir);
            self.progress_reporter
                .report_progress(index, total, Some(&label));

            match self.search_file(&search, path, &label) {
                Ok(matches) => summary.record_document(matches),
                Err(e) => {
                    tracing::debug!(file = %label, error = %e, "skipping SBOM");
                    self.progress_reporter
                        .report_error(&format!("❌ Skipping {}: {}", label, e));
                    summary.record_skipped(path, e.to_string());
                }
            }
        }
        if total > 0 {
            self.progress_reporter.report_progress(total, total, None);
        }

        let export = self.export_matches(&request, &summary);
        Ok(SearchResponse::new(summary, export))
    }

    /// Expands `ALL` and removes duplicates, keeping first-seen order
    fn resolve_files(&self, request: &SearchRequest) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for selector in &request.selectors {
            match selector {
                FileSelector::AllJson => {
                    files.extend(self.sbom_reader.list_json_files(&request.working_dir)?)
                }
                FileSelector::Path(path) => files.push(path.clone()),
            }
        }

        let mut seen = HashSet::new();
        files.retain(|path| seen.insert(dedup_key(&request.working_dir, path)));
        Ok(files)
    }

    /// Loads, validates and searches one file
    fn search_file(
        &self,
        search: &ComponentSearch,
        path: &Path,
        label: &str,
    ) -> Result<DocumentMatches> {
        let bytes = self.sbom_reader.read_sbom(path)?;
        let document = SbomLoader::parse_bytes(&bytes, label)?;
        FormatValidator::validate(&document, label)?;

        if !document.has_components() {
            self.progress_reporter
                .report(&format!("ℹ️  {} contains no components", label));
        }

        let matches = search.search_document(&document, label);
        for row in &matches.rows {
            self.progress_reporter.report_match(&format!(
                "Found match: {}, Version: {}, Component type: {}",
                row.component_name, row.component_version, row.component_type
            ));
        }
        tracing::debug!(file = %label, matches = matches.count(), "searched SBOM");

        Ok(matches)
    }

    /// Writes the CSV table when requested and there is something to write
    fn export_matches(&self, request: &SearchRequest, summary: &SearchSummary) -> ExportOutcome {
        let Some(path) = request.csv_output.as_ref() else {
            return ExportOutcome::NotRequested;
        };
        if summary.overall_count() == 0 {
            return ExportOutcome::NoMatches;
        }

        match self.report_sink.write_match_table(path, summary.rows()) {
            Ok(()) => ExportOutcome::Written(path.clone()),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "CSV export failed");
                ExportOutcome::Failed {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Path shown to the user and written to the CSV, relative to the
    /// working directory when possible
    fn source_label(path: &Path, working_dir: &Path) -> String {
        path.strip_prefix(working_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// `a.json`, `./a.json` and `<working_dir>/a.json` name the same file
fn dedup_key(working_dir: &Path, path: &Path) -> PathBuf {
    working_dir
        .join(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
