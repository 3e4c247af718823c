use crate::sbom_processing::domain::{Component, DocumentMatches, MatchRow, SbomDocument};
use crate::sbom_processing::services::ComponentNormalizer;

/// ComponentSearch domain service: case-insensitive substring match of a
/// term against component names, across every component type
#[derive(Debug, Clone)]
pub struct ComponentSearch {
    term_lower: String,
}

impl ComponentSearch {
    pub fn new(term: &str) -> Self {
        Self {
            term_lower: term.to_lowercase(),
        }
    }

    pub fn matches(&self, component: &Component) -> bool {
        component.name().to_lowercase().contains(&self.term_lower)
    }

    /// Collects the matching components of one document in document order
    ///
    /// # Arguments
    /// * `document` - A document that already passed `FormatValidator`
    /// * `source_file` - Label written to each `MatchRow`
    pub fn search_document(&self, document: &SbomDocument, source_file: &str) -> DocumentMatches {
        let rows = ComponentNormalizer::normalize_all(document)
            .into_iter()
            .filter(|c| self.matches(c))
            .map(|c| MatchRow {
                source_file: source_file.to_string(),
                component_name: c.name().to_string(),
                component_version: c.version().to_string(),
                component_type: c.component_type().to_string(),
            })
            .collect();

        DocumentMatches { rows }
    }
}
