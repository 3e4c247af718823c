pub mod app_name;
pub mod component;
pub mod data_source;
pub mod sbom_document;
pub mod search_summary;

pub use app_name::AppName;
pub use component::{Component, LicenseEntry, FIELD_PLACEHOLDER, LIBRARY_TYPE};
pub use data_source::DataSource;
pub use sbom_document::{ComponentRecord, LicenseChoice, LicenseRef, SbomDocument};
pub use search_summary::{DocumentMatches, MatchRow, SearchSummary, SkippedFile};
