use crate::application::dto::{NoticeRequest, NoticeResponse, NoticeSource};
use crate::application::read_models::NoticeReadModelBuilder;
use crate::ports::outbound::{
    NoticeFormatter, ProgressReporter, ReportSink, SbomReader, SbomRepository,
};
use crate::sbom_processing::domain::{DataSource, SbomDocument};
use crate::sbom_processing::services::{FormatValidator, SbomLoader};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;

/// Layout of the `GENERATED:` timestamp (locale date and time)
const TIMESTAMP_FORMAT: &str = "%c";

/// GenerateNoticeUseCase - Core use case for license notice generation
///
/// This use case orchestrates loading, validation, formatting and writing of
/// the notice using generic dependency injection for all infrastructure.
///
/// # Type Parameters
/// * `R` - SbomReader implementation
/// * `REPO` - SbomRepository implementation (optional, needed for application lookups)
/// * `F` - NoticeFormatter implementation
/// * `S` - ReportSink implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateNoticeUseCase<R, REPO, F, S, PR> {
    sbom_reader: R,
    sbom_repository: Option<REPO>,
    formatter: F,
    report_sink: S,
    progress_reporter: PR,
}

impl<R, REPO, F, S, PR> GenerateNoticeUseCase<R, REPO, F, S, PR>
where
    R: SbomReader,
    REPO: SbomRepository,
    F: NoticeFormatter,
    S: ReportSink,
    PR: ProgressReporter,
{
    /// Creates a new GenerateNoticeUseCase with injected dependencies
    pub fn new(
        sbom_reader: R,
        sbom_repository: Option<REPO>,
        formatter: F,
        report_sink: S,
        progress_reporter: PR,
    ) -> Self {
        Self {
            sbom_reader,
            sbom_repository,
            formatter,
            report_sink,
            progress_reporter,
        }
    }

    /// Executes the notice generation use case
    ///
    /// Any failure aborts the run: there is no fallback document, and a notice
    /// that cannot be written is a failed run.
    pub fn execute(&self, request: NoticeRequest) -> Result<NoticeResponse> {
        // Step 1: Obtain and validate the SBOM
        let (document, data_source) = match &request.source {
            NoticeSource::Application(app_name) => {
                (self.load_from_service(app_name)?, DataSource::Remote)
            }
            NoticeSource::SbomFile(path) => (self.load_from_file(path)?, DataSource::Local),
        };

        // Step 2: Build the read model and render it
        self.progress_reporter.report("📝 Building notice file...");
        let generated_at = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let model = NoticeReadModelBuilder::build(&document, data_source, generated_at);
        let content = self.formatter.format(&model)?;

        // Step 3: Write the notice
        let filename = model.app_name.notice_filename();
        let output_path = request.output_dir.join(&filename);
        self.report_sink.write_notice(&output_path, &content)?;

        tracing::debug!(
            path = %output_path.display(),
            components = model.component_count(),
            "notice written"
        );

        Ok(NoticeResponse::new(
            filename,
            output_path,
            model.component_count(),
        ))
    }

    /// Loads and validates a local SBOM file
    fn load_from_file(&self, path: &Path) -> Result<SbomDocument> {
        self.progress_reporter
            .report(&format!("📖 Loading the SBOM from: {}", path.display()));

        let source_name = path.display().to_string();
        let bytes = self.sbom_reader.read_sbom(path)?;
        let document = SbomLoader::parse_bytes(&bytes, &source_name)?;
        FormatValidator::validate(&document, &source_name)?;

        Ok(document)
    }

    /// Resolves the application and fetches its SBOM from the SCA service
    fn load_from_service(&self, app_name: &str) -> Result<SbomDocument> {
        let repository = self.sbom_repository.as_ref().ok_or_else(|| {
            SbomError::Validation {
                message: "No SCA service URL is configured. Pass --service-url, set SBOM_NOTICE_SERVICE_URL or add service_url to the config file.".to_string(),
            }
        })?;

        self.progress_reporter.report("🔍 Looking up application ID...");
        let app_id = repository
            .find_application_id(app_name)?
            .ok_or_else(|| SbomError::ApplicationNotFound {
                name: app_name.to_string(),
            })?;
        self.progress_reporter
            .report(&format!("✅ Application ID is: {}", app_id));

        self.progress_reporter.report("📥 Retrieving SBOM...");
        let payload = repository.fetch_sbom(&app_id)?;

        let source_name = format!("SBOM of application '{}'", app_name);
        let document = SbomLoader::parse_bytes(&payload, &source_name)?;
        FormatValidator::validate(&document, &source_name)?;

        Ok(document)
    }
}
