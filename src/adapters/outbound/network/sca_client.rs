use crate::ports::outbound::{ApplicationRecord, SbomRepository};
use crate::shared::error::SbomError;
use crate::shared::Result;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;

/// SCA service client for application lookups and SBOM generation
///
/// Talks to the service's REST API with a blocking client. Every request is
/// bounded by the configured timeout and carries the bearer token when one
/// is configured.
pub struct ScaClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl ScaClient {
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    const APPLICATIONS_PATH: &'static str = "/appsec/v1/applications";
    const SBOM_PATH: &'static str = "/srcclr/sbom/v1/targets";

    /// Creates a client for the service at `base_url`
    pub fn new(base_url: &str, api_token: Option<String>, timeout_secs: u64) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-notice/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn applications_url(&self, app_name: &str) -> String {
        format!(
            "{}{}?name={}",
            self.base_url,
            Self::APPLICATIONS_PATH,
            urlencoding::encode(app_name)
        )
    }

    fn sbom_url(&self, app_id: &str) -> String {
        format!(
            "{}{}/{}/cyclonedx?type=application",
            self.base_url,
            Self::SBOM_PATH,
            urlencoding::encode(app_id)
        )
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send(&self, url: &str) -> Result<Response> {
        tracing::debug!(url, "GET");
        self.get(url).send().map_err(|e| {
            SbomError::ServiceUnavailable {
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl SbomRepository for ScaClient {
    fn find_applications(&self, app_name: &str) -> Result<Vec<ApplicationRecord>> {
        let response = self.send(&self.applications_url(app_name))?;
        if !response.status().is_success() {
            return Err(SbomError::ServiceUnavailable {
                details: format!("application lookup returned status {}", response.status()),
            }
            .into());
        }

        let page: ApplicationPage = response.json().map_err(|e| SbomError::ServiceUnavailable {
            details: format!("unexpected application lookup response: {}", e),
        })?;
        Ok(page.into_records())
    }

    fn fetch_sbom(&self, app_id: &str) -> Result<Vec<u8>> {
        let response = self.send(&self.sbom_url(app_id))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::debug!(%status, body = %body, "SBOM generation rejected");
            return Err(SbomError::SbomGenerationFailed {
                app_id: app_id.to_string(),
                details: format!("service returned status {}", status),
            }
            .into());
        }

        // Decoding is left to the loader so bad payloads get loader errors
        let body = response.bytes().map_err(|e| SbomError::ServiceUnavailable {
            details: format!("failed to read SBOM response: {}", e),
        })?;
        Ok(body.to_vec())
    }
}

// Application lookup response structures

#[derive(Debug, Default, Deserialize)]
struct ApplicationPage {
    #[serde(rename = "_embedded", default)]
    embedded: Option<EmbeddedApplications>,
}

#[derive(Debug, Default, Deserialize)]
struct EmbeddedApplications {
    #[serde(default)]
    applications: Vec<ApplicationEntry>,
}

#[derive(Debug, Deserialize)]
struct ApplicationEntry {
    guid: Option<String>,
    profile: Option<ApplicationProfile>,
}

#[derive(Debug, Deserialize)]
struct ApplicationProfile {
    name: Option<String>,
}

impl ApplicationPage {
    /// Keeps entries that carry both an identifier and a name
    fn into_records(self) -> Vec<ApplicationRecord> {
        self.embedded
            .map(|e| e.applications)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| {
                Some(ApplicationRecord {
                    guid: entry.guid?,
                    name: entry.profile?.name?,
                })
            })
            .collect()
    }
}
