//! Notice read model
//!
//! Everything the notice layout needs, already resolved: the cleaned
//! application name, the data source label, the generation timestamp and
//! either the sorted library components or the "no components" marker.

use crate::sbom_processing::domain::{AppName, Component, DataSource, SbomDocument};
use crate::sbom_processing::services::ComponentNormalizer;

/// Body of the notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeBody {
    /// The SBOM has no `components` array, or it is empty
    NoComponents,
    /// Library components sorted by name (may be empty when the SBOM only
    /// lists non-library components)
    Components(Vec<Component>),
}

/// Main read model for the license notice
#[derive(Debug, Clone)]
pub struct NoticeReadModel {
    pub app_name: AppName,
    pub data_source: DataSource,
    /// Human-readable local time of generation
    pub generated_at: String,
    pub body: NoticeBody,
}

impl NoticeReadModel {
    /// Number of library rows the notice lists
    pub fn component_count(&self) -> usize {
        match &self.body {
            NoticeBody::NoComponents => 0,
            NoticeBody::Components(components) => components.len(),
        }
    }
}

/// Builder for `NoticeReadModel`
pub struct NoticeReadModelBuilder;

impl NoticeReadModelBuilder {
    /// Builds the read model from a validated document
    pub fn build(
        document: &SbomDocument,
        data_source: DataSource,
        generated_at: String,
    ) -> NoticeReadModel {
        let body = if document.has_components() {
            NoticeBody::Components(ComponentNormalizer::notice_components(document))
        } else {
            NoticeBody::NoComponents
        };

        NoticeReadModel {
            app_name: AppName::from_metadata(document.application_name()),
            data_source,
            generated_at,
            body,
        }
    }
}
