//! sbom-notice - license notices and component search for CycloneDX SBOMs
//!
//! This library loads CycloneDX JSON documents (from local files or a remote
//! SCA service), validates them, and produces either a fixed-width open source
//! license notice or a component search report, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_processing`): Document model, normalization and search
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_notice::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateNoticeUseCase::new(
//!     FileSystemReader::new(),
//!     None::<ScaClient>,
//!     PlainTextNoticeFormatter::new(),
//!     FileSystemWriter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = NoticeRequest::from_sbom_file("bom.json", PathBuf::from("."));
//! let response = use_case.execute(request)?;
//! println!("Created {}", response.filename);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ports;
pub mod sbom_processing;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::PlainTextNoticeFormatter;
    pub use crate::adapters::outbound::network::ScaClient;
    pub use crate::application::dto::{
        ExportOutcome, FileSelector, NoticeRequest, NoticeResponse, NoticeSource, SearchRequest,
        SearchResponse,
    };
    pub use crate::application::use_cases::{GenerateNoticeUseCase, SearchComponentsUseCase};
    pub use crate::ports::outbound::{
        ApplicationRecord, NoticeFormatter, ProgressReporter, ReportSink, SbomReader,
        SbomRepository,
    };
    pub use crate::sbom_processing::domain::{
        AppName, Component, DataSource, LicenseEntry, MatchRow, SbomDocument, SearchSummary,
    };
    pub use crate::sbom_processing::services::{
        ComponentNormalizer, ComponentSearch, FormatValidator, SbomLoader,
    };
    pub use crate::shared::Result;
}
