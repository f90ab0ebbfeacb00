use crate::sbom_pipeline::domain::{ProjectIdentity, ProjectRecord, SbomArtifact};
use thiserror::Error;

/// Failure of a single tracker API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("request to {url} failed: {details}")]
    Transport { url: String, details: String },

    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {url}: {details}")]
    Decode { url: String, details: String },
}

impl TrackerError {
    /// HTTP status of the failed call, if the tracker answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TrackerError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Outcome of the project upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created,
    AlreadyExists,
}

/// Tracker acknowledgement of an SBOM upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BomUploadReceipt {
    /// Processing token returned by the tracker, if any
    pub token: Option<String>,
}

/// TrackerClient port for the vulnerability tracker HTTP API
///
/// Every call is blocking. Implementations own the API credential; callers
/// never see it.
pub trait TrackerClient {
    /// Creates the project if absent, marking it active
    ///
    /// Must be idempotent: repeating the call for an existing project
    /// reports `AlreadyExists` instead of failing.
    fn upsert_project(&self, identity: &ProjectIdentity)
        -> Result<RegistrationOutcome, TrackerError>;

    /// Lists projects matching the identity, in the tracker's response order
    fn find_projects(&self, identity: &ProjectIdentity)
        -> Result<Vec<ProjectRecord>, TrackerError>;

    /// Submits the SBOM content for the project
    ///
    /// # Arguments
    /// * `identity` - Project the SBOM belongs to
    /// * `artifact` - Artifact metadata (file name, format)
    /// * `content` - Raw SBOM bytes, already validated as non-empty
    fn upload_bom(
        &self,
        identity: &ProjectIdentity,
        artifact: &SbomArtifact,
        content: Vec<u8>,
    ) -> Result<BomUploadReceipt, TrackerError>;
}

impl<T: TrackerClient + ?Sized> TrackerClient for &T {
    fn upsert_project(
        &self,
        identity: &ProjectIdentity,
    ) -> Result<RegistrationOutcome, TrackerError> {
        (**self).upsert_project(identity)
    }

    fn find_projects(&self, identity: &ProjectIdentity) -> Result<Vec<ProjectRecord>, TrackerError> {
        (**self).find_projects(identity)
    }

    fn upload_bom(
        &self,
        identity: &ProjectIdentity,
        artifact: &SbomArtifact,
        content: Vec<u8>,
    ) -> Result<BomUploadReceipt, TrackerError> {
        (**self).upload_bom(identity, artifact, content)
    }
}
