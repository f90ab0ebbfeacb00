use crate::application::dto::PublishResponse;
use crate::ports::outbound::{RegistrationOutcome, ReportFormatter};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport<'a> {
    project: ProjectSection<'a>,
    sbom: SbomSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<RepositorySection<'a>>,
    project_link: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    upload_token: Option<&'a str>,
    completed_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectSection<'a> {
    name: &'a str,
    version: &'a str,
    uuid: String,
    created: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SbomSection {
    build_system: String,
    format: String,
    path: String,
    size_bytes: u64,
}

#[derive(Debug, Serialize)]
struct RepositorySection<'a> {
    url: &'a str,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    reference: Option<&'a str>,
}

/// JsonReportFormatter adapter for machine-readable run reports
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, response: &PublishResponse) -> Result<String> {
        let report = RunReport {
            project: ProjectSection {
                name: response.identity.name(),
                version: response.identity.version(),
                uuid: response.project_uuid.to_string(),
                created: response.registration == RegistrationOutcome::Created,
            },
            sbom: SbomSection {
                build_system: response.build_system.to_string(),
                format: response.artifact.format().to_string(),
                path: response.artifact.path().display().to_string(),
                size_bytes: response.artifact.size_bytes(),
            },
            repository: response.repository.as_ref().map(|repo| RepositorySection {
                url: &repo.url,
                reference: repo.reference.as_deref(),
            }),
            project_link: &response.project_link,
            upload_token: response.upload_token.as_deref(),
            completed_at: response.completed_at.to_rfc3339(),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}
