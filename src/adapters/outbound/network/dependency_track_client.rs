use crate::ports::outbound::{BomUploadReceipt, RegistrationOutcome, TrackerClient, TrackerError};
use crate::sbom_pipeline::domain::{
    ApiKey, ProjectIdentity, ProjectRecord, SbomArtifact, TrackerEndpoint,
};
use crate::shared::Result;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use reqwest::header::HeaderValue;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Longest response body excerpt kept in error messages
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Serialize)]
struct ProjectUpsertRequest<'a> {
    name: &'a str,
    version: &'a str,
    active: bool,
}

#[derive(Debug, Deserialize)]
struct BomUploadResponse {
    #[serde(default)]
    token: Option<String>,
}

/// DependencyTrackClient adapter for the Dependency-Track REST API
///
/// This adapter implements the TrackerClient port with a blocking reqwest
/// client. It owns the API key for the lifetime of the run and sends it as a
/// sensitive `X-Api-Key` header, so it is redacted from reqwest's debug output.
pub struct DependencyTrackClient {
    client: Client,
    endpoint: TrackerEndpoint,
    api_key: ApiKey,
}

impl DependencyTrackClient {
    /// Default per-request timeout; BOM uploads of large projects are slow
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 300;

    /// Creates a new client for the given tracker
    pub fn new(endpoint: TrackerEndpoint, api_key: ApiKey, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("java-sbom-uploader/{}", version);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    fn api_key_header(&self, url: &str) -> std::result::Result<HeaderValue, TrackerError> {
        let mut value =
            HeaderValue::from_str(self.api_key.expose()).map_err(|_| TrackerError::Transport {
                url: url.to_string(),
                details: "API key is not a valid header value".to_string(),
            })?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Lookup URL with name and version query parameters
    fn lookup_url(&self, identity: &ProjectIdentity) -> String {
        format!(
            "{}?name={}&version={}",
            self.endpoint.api_url("project"),
            urlencoding::encode(identity.name()),
            urlencoding::encode(identity.version())
        )
    }

    fn transport_error(url: &str, error: reqwest::Error) -> TrackerError {
        // Strip the URL from reqwest's message; it is already part of the error
        TrackerError::Transport {
            url: url.to_string(),
            details: error.without_url().to_string(),
        }
    }

    /// Passes successful responses through and turns the rest into `TrackerError::Status`
    fn ensure_success(url: &str, response: Response) -> std::result::Result<Response, TrackerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let body: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
        Err(TrackerError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: if body.is_empty() {
                status.canonical_reason().unwrap_or("no response body").to_string()
            } else {
                body
            },
        })
    }
}

impl TrackerClient for DependencyTrackClient {
    fn upsert_project(
        &self,
        identity: &ProjectIdentity,
    ) -> std::result::Result<RegistrationOutcome, TrackerError> {
        let url = self.endpoint.api_url("project");
        let body = ProjectUpsertRequest {
            name: identity.name(),
            version: identity.version(),
            active: true,
        };
        debug!(%url, project = %identity, "upserting tracker project");

        let response = self
            .client
            .put(&url)
            .header(API_KEY_HEADER, self.api_key_header(&url)?)
            .json(&body)
            .send()
            .map_err(|e| Self::transport_error(&url, e))?;

        // Dependency-Track answers 409 when the project already exists
        if response.status() == StatusCode::CONFLICT {
            debug!(project = %identity, "tracker project already exists");
            return Ok(RegistrationOutcome::AlreadyExists);
        }

        Self::ensure_success(&url, response)?;
        Ok(RegistrationOutcome::Created)
    }

    fn find_projects(
        &self,
        identity: &ProjectIdentity,
    ) -> std::result::Result<Vec<ProjectRecord>, TrackerError> {
        let url = self.lookup_url(identity);
        debug!(%url, "looking up tracker project");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key_header(&url)?)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| Self::transport_error(&url, e))?;

        let response = Self::ensure_success(&url, response)?;
        let text = response
            .text()
            .map_err(|e| Self::transport_error(&url, e))?;

        serde_json::from_str::<Vec<ProjectRecord>>(&text).map_err(|e| TrackerError::Decode {
            url: url.clone(),
            details: e.to_string(),
        })
    }

    fn upload_bom(
        &self,
        identity: &ProjectIdentity,
        artifact: &SbomArtifact,
        content: Vec<u8>,
    ) -> std::result::Result<BomUploadReceipt, TrackerError> {
        let url = self.endpoint.api_url("bom");
        debug!(%url, project = %identity, bytes = content.len(), "uploading SBOM");

        let bom = Part::bytes(content)
            .file_name(artifact.file_name())
            .mime_str("application/json")
            .map_err(|e| Self::transport_error(&url, e))?;
        let form = Form::new()
            .text("projectName", identity.name().to_string())
            .text("projectVersion", identity.version().to_string())
            .part("bom", bom);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key_header(&url)?)
            .multipart(form)
            .send()
            .map_err(|e| Self::transport_error(&url, e))?;

        let response = Self::ensure_success(&url, response)?;
        let text = response.text().unwrap_or_default();
        let token = serde_json::from_str::<BomUploadResponse>(&text)
            .ok()
            .and_then(|body| body.token);

        Ok(BomUploadReceipt { token })
    }
}
