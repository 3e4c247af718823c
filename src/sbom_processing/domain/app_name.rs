/// Maximum number of characters kept from the application name
const MAX_APP_NAME_CHARS: usize = 50;

/// Characters removed from the application name because they are unsafe in file names
const FILENAME_UNSAFE_CHARS: &[char] = &['"', '\\', '/', ':', '*', '?', '<', '>', '|'];

/// Name used when the SBOM does not name its application
pub const FALLBACK_APP_NAME: &str = "APPLICATION";

/// Suffix of the generated notice file
const NOTICE_FILE_SUFFIX: &str = "_notice.txt";

/// NewType wrapper for an application name that is safe to embed in a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppName(String);

impl AppName {
    /// Builds the cleaned name from `metadata.component.name`.
    ///
    /// Missing or empty names fall back to `APPLICATION`. The name is cut to
    /// 50 characters first, then unsafe characters are dropped.
    pub fn from_metadata(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(name) if !name.is_empty() => name,
            _ => FALLBACK_APP_NAME,
        };

        let cleaned: String = raw
            .chars()
            .take(MAX_APP_NAME_CHARS)
            .filter(|c| !FILENAME_UNSAFE_CHARS.contains(c))
            .collect();

        if cleaned.is_empty() {
            return Self(FALLBACK_APP_NAME.to_string());
        }
        Self(cleaned)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<name>_notice.txt`
    pub fn notice_filename(&self) -> String {
        format!("{}{}", self.0, NOTICE_FILE_SUFFIX)
    }
}

impl std::fmt::Display for AppName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
