/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_report_sink;
mod mock_sbom_reader;
mod mock_sbom_repository;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_sink::MockReportSink;
pub use mock_sbom_reader::MockSbomReader;
pub use mock_sbom_repository::MockSbomRepository;
