/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod notice_formatter;
pub mod progress_reporter;
pub mod report_sink;
pub mod sbom_reader;
pub mod sbom_repository;

pub use notice_formatter::NoticeFormatter;
pub use progress_reporter::ProgressReporter;
pub use report_sink::ReportSink;
pub use sbom_reader::SbomReader;
pub use sbom_repository::{ApplicationRecord, SbomRepository};
