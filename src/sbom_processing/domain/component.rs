/// Placeholder for a missing type, name or version so fixed-width output
/// never has to special-case absent fields
pub const FIELD_PLACEHOLDER: &str = " ";

/// Component type included in license notices
pub const LIBRARY_TYPE: &str = "library";

/// LicenseEntry value object: a resolved license display name and reference URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseEntry {
    name: String,
    url: String,
}

impl LicenseEntry {
    pub fn new(name: String, url: String) -> Self {
        Self { name, url }
    }

    /// License id, name or expression; empty when the SBOM gives none
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference URL; empty when absent
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Component value object with every field resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    version: String,
    component_type: String,
    licenses: Vec<LicenseEntry>,
}

impl Component {
    pub fn new(
        name: String,
        version: String,
        component_type: String,
        licenses: Vec<LicenseEntry>,
    ) -> Self {
        Self {
            name,
            version,
            component_type,
            licenses,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    pub fn licenses(&self) -> &[LicenseEntry] {
        &self.licenses
    }

    pub fn is_library(&self) -> bool {
        self.component_type == LIBRARY_TYPE
    }
}
