use super::RepositoryRef;
use crate::ports::outbound::RegistrationOutcome;
use crate::sbom_pipeline::domain::{BuildSystem, ProjectIdentity, SbomArtifact};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// PublishResponse - Result of a successful pipeline run
#[derive(Debug, Clone)]
pub struct PublishResponse {
    pub identity: ProjectIdentity,
    pub build_system: BuildSystem,
    pub artifact: SbomArtifact,
    pub registration: RegistrationOutcome,
    pub project_uuid: Uuid,
    /// Deep link to the project page in the tracker
    pub project_link: String,
    /// Tracker processing token for the uploaded SBOM
    pub upload_token: Option<String>,
    pub repository: Option<RepositoryRef>,
    pub completed_at: DateTime<Utc>,
}
