use sbom_notice::prelude::*;
use sbom_notice::shared::error::SbomError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock SbomRepository with canned applications and documents
#[derive(Default, Clone)]
pub struct MockSbomRepository {
    applications: Vec<ApplicationRecord>,
    documents: HashMap<String, Vec<u8>>,
    unavailable: bool,
    pub lookups: Arc<Mutex<Vec<String>>>,
}

impl MockSbomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_application(mut self, guid: &str, name: &str, document: Option<Value>) -> Self {
        self.applications.push(ApplicationRecord {
            guid: guid.to_string(),
            name: name.to_string(),
        });
        if let Some(document) = document {
            self.documents
                .insert(guid.to_string(), serde_json::to_vec(&document).unwrap());
        }
        self
    }

    /// Registers an application whose SBOM response body is `body` verbatim
    pub fn with_raw_sbom(mut self, guid: &str, name: &str, body: &[u8]) -> Self {
        self.applications.push(ApplicationRecord {
            guid: guid.to_string(),
            name: name.to_string(),
        });
        self.documents.insert(guid.to_string(), body.to_vec());
        self
    }

    /// Every call fails as if the service could not be reached
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn lookup_names(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(SbomError::ServiceUnavailable {
                details: "connection refused".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl SbomRepository for MockSbomRepository {
    fn find_applications(&self, app_name: &str) -> Result<Vec<ApplicationRecord>> {
        self.check_available()?;
        self.lookups.lock().unwrap().push(app_name.to_string());

        // Fuzzy search like the real service: substring, case-insensitive
        let needle = app_name.to_lowercase();
        Ok(self
            .applications
            .iter()
            .filter(|app| app.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn fetch_sbom(&self, app_id: &str) -> Result<Vec<u8>> {
        self.check_available()?;
        self.documents.get(app_id).cloned().ok_or_else(|| {
            SbomError::SbomGenerationFailed {
                app_id: app_id.to_string(),
                details: "service returned status 404 Not Found".to_string(),
            }
            .into()
        })
    }
}
