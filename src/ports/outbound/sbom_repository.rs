use crate::shared::Result;

/// An application registered in the SCA service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    /// Service identifier used to request the SBOM
    pub guid: String,
    /// Display name from the application profile
    pub name: String,
}

/// SbomRepository port for the remote SCA/SBOM service
///
/// The service is treated as opaque: it can look applications up by name and
/// produce a CycloneDX document for one of them.
pub trait SbomRepository {
    /// Returns the applications whose name matches `app_name` according to the
    /// service's own (possibly fuzzy) search
    ///
    /// # Errors
    /// Returns `SbomError::ServiceUnavailable` if the service cannot be reached
    /// or answers with an error status
    fn find_applications(&self, app_name: &str) -> Result<Vec<ApplicationRecord>>;

    /// Generates the CycloneDX SBOM of an application and returns the
    /// response body undecoded
    ///
    /// # Errors
    /// Returns `SbomError::SbomGenerationFailed` if the service cannot produce
    /// an SBOM for the application (e.g. no recent SCA scan), or
    /// `SbomError::ServiceUnavailable` on transport failures
    fn fetch_sbom(&self, app_id: &str) -> Result<Vec<u8>>;

    /// Resolves an application name to its identifier, requiring an exact
    /// name match among the search results
    fn find_application_id(&self, app_name: &str) -> Result<Option<String>> {
        Ok(self
            .find_applications(app_name)?
            .into_iter()
            .find(|app| app.name == app_name)
            .map(|app| app.guid))
    }
}
