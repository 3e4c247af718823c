use crate::sbom_processing::domain::{
    Component, ComponentRecord, LicenseChoice, LicenseEntry, SbomDocument, FIELD_PLACEHOLDER,
};

/// ComponentNormalizer domain service
///
/// Resolves every optional field of a raw record once, so formatting and
/// search only ever see `Component` values with plain string fields.
pub struct ComponentNormalizer;

impl ComponentNormalizer {
    /// Normalizes a single record
    pub fn normalize(record: &ComponentRecord) -> Component {
        let licenses = record
            .licenses
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(Self::resolve_license)
            .collect();

        Component::new(
            Self::or_placeholder(record.name.as_deref()),
            Self::or_placeholder(record.version.as_deref()),
            Self::or_placeholder(record.component_type.as_deref()),
            licenses,
        )
    }

    /// Normalizes every component of a document, preserving document order
    pub fn normalize_all(document: &SbomDocument) -> Vec<Component> {
        document
            .component_records()
            .iter()
            .map(Self::normalize)
            .collect()
    }

    /// Library components sorted for the license notice
    pub fn notice_components(document: &SbomDocument) -> Vec<Component> {
        let mut components = Self::normalize_all(document);
        Self::sort_by_name(&mut components);
        components.retain(Component::is_library);
        components
    }

    /// Sorts by name, ignoring case. Stable, so equal names keep document order.
    pub fn sort_by_name(components: &mut [Component]) {
        components.sort_by_key(|c| c.name().to_lowercase());
    }

    /// Display name is `id`, then `name`, then `expression`, else empty
    fn resolve_license(choice: &LicenseChoice) -> LicenseEntry {
        let license = choice.license.as_ref();
        let name = license
            .and_then(|l| l.id.as_deref().or(l.name.as_deref()))
            .or(choice.expression.as_deref())
            .unwrap_or_default();
        let url = license.and_then(|l| l.url.as_deref()).unwrap_or_default();

        LicenseEntry::new(name.to_string(), url.to_string())
    }

    fn or_placeholder(value: Option<&str>) -> String {
        match value {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => FIELD_PLACEHOLDER.to_string(),
        }
    }
}
