use crate::sbom_processing::domain::SbomDocument;
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde_json::Value;

/// Expected `bomFormat`, compared case-insensitively
const CYCLONEDX_FORMAT: &str = "cyclonedx";

/// FormatValidator domain service: the CycloneDX gate every document passes
/// before its components are read
pub struct FormatValidator;

impl FormatValidator {
    /// Confirms that `bomFormat` is present and names CycloneDX
    ///
    /// # Errors
    /// - `MissingFormatField` when `bomFormat` is absent or null
    /// - `UnsupportedFormat` for any other value
    pub fn validate(document: &SbomDocument, source_name: &str) -> Result<()> {
        let format = match &document.bom_format {
            None | Some(Value::Null) => {
                return Err(SbomError::MissingFormatField {
                    source_name: source_name.to_string(),
                }
                .into());
            }
            Some(format) => format,
        };

        match format {
            Value::String(s) if s.eq_ignore_ascii_case(CYCLONEDX_FORMAT) => Ok(()),
            Value::String(s) => Err(SbomError::UnsupportedFormat {
                source_name: source_name.to_string(),
                found: s.clone(),
            }
            .into()),
            other => Err(SbomError::UnsupportedFormat {
                source_name: source_name.to_string(),
                found: other.to_string(),
            }
            .into()),
        }
    }
}
