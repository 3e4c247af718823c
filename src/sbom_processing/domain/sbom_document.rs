//! Serde model of the parts of a CycloneDX JSON document this tool reads.
//!
//! Every field is optional here; `ComponentNormalizer` turns records into
//! fully-defaulted `Component` values before anything else touches them.

use serde::Deserialize;
use serde_json::Value;

/// Root of a CycloneDX JSON document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbomDocument {
    /// Kept as a raw value so a non-string format is reported as unsupported
    /// rather than as a parse failure
    #[serde(rename = "bomFormat", default)]
    pub bom_format: Option<Value>,
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
    #[serde(default)]
    pub components: Option<Vec<ComponentRecord>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub component: Option<MetadataComponent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataComponent {
    #[serde(default)]
    pub name: Option<String>,
}

/// A raw entry of the `components` array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentRecord {
    #[serde(rename = "type", default)]
    pub component_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub licenses: Option<Vec<LicenseChoice>>,
}

/// One entry of a component's `licenses` array: either a single license or
/// an SPDX expression
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseChoice {
    #[serde(default)]
    pub license: Option<LicenseRef>,
    #[serde(default)]
    pub expression: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl SbomDocument {
    /// Name of the application the SBOM describes (`metadata.component.name`)
    pub fn application_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.component.as_ref())
            .and_then(|c| c.name.as_deref())
    }

    /// Component records in document order; empty when the array is absent
    pub fn component_records(&self) -> &[ComponentRecord] {
        self.components.as_deref().unwrap_or(&[])
    }

    pub fn has_components(&self) -> bool {
        !self.component_records().is_empty()
    }
}
