use crate::sbom_processing::domain::SbomDocument;
use crate::shared::error::SbomError;
use crate::shared::Result;

const UTF8_BOM: char = '\u{feff}';

/// SbomLoader domain service for turning raw payloads into `SbomDocument`s
///
/// Decoding and JSON failures become `SbomDecodeError` / `MalformedJson` so
/// callers can tell them apart from validation failures.
pub struct SbomLoader;

impl SbomLoader {
    /// Parses raw bytes from a file or an SCA service response
    ///
    /// # Arguments
    /// * `bytes` - Payload exactly as read or received
    /// * `source_name` - Name used in error messages (file path or application)
    pub fn parse_bytes(bytes: &[u8], source_name: &str) -> Result<SbomDocument> {
        let text = std::str::from_utf8(bytes).map_err(|e| SbomError::SbomDecodeError {
            source_name: source_name.to_string(),
            details: e.to_string(),
        })?;

        Self::parse_str(text.trim_start_matches(UTF8_BOM), source_name)
    }

    /// Parses JSON text
    pub fn parse_str(text: &str, source_name: &str) -> Result<SbomDocument> {
        let document = serde_json::from_str(text).map_err(|e| SbomError::MalformedJson {
            source_name: source_name.to_string(),
            details: e.to_string(),
        })?;
        Ok(document)
    }
}
