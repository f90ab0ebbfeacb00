use java_sbom_uploader::prelude::*;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct TrackerState {
    projects: Vec<ProjectRecord>,
    uploads: Vec<(String, usize)>,
    upsert_calls: usize,
    find_calls: usize,
    upload_calls: usize,
}

/// In-memory Dependency-Track with upsert semantics and call counters
///
/// Clones share state, so a test can keep a handle after moving one into
/// the use case.
#[derive(Clone, Default)]
pub struct MockTrackerClient {
    state: Arc<Mutex<TrackerState>>,
    upsert_failure: Option<TrackerError>,
    upload_failure: Option<TrackerError>,
}

impl MockTrackerClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a project record, e.g. a duplicate left by an earlier run
    pub fn with_project(self, name: &str, version: &str, uuid: &str) -> Self {
        self.state.lock().unwrap().projects.push(ProjectRecord {
            name: name.to_string(),
            version: Some(version.to_string()),
            uuid: Uuid::parse_str(uuid).unwrap(),
            active: true,
        });
        self
    }

    pub fn failing_upsert(mut self, status: u16) -> Self {
        self.upsert_failure = Some(status_error("project", status));
        self
    }

    pub fn failing_upload(mut self, status: u16) -> Self {
        self.upload_failure = Some(status_error("bom", status));
        self
    }

    pub fn projects(&self) -> Vec<ProjectRecord> {
        self.state.lock().unwrap().projects.clone()
    }

    pub fn uploads(&self) -> Vec<(String, usize)> {
        self.state.lock().unwrap().uploads.clone()
    }

    pub fn upsert_calls(&self) -> usize {
        self.state.lock().unwrap().upsert_calls
    }

    pub fn find_calls(&self) -> usize {
        self.state.lock().unwrap().find_calls
    }

    pub fn upload_calls(&self) -> usize {
        self.state.lock().unwrap().upload_calls
    }

    pub fn total_calls(&self) -> usize {
        self.upsert_calls() + self.find_calls() + self.upload_calls()
    }
}

fn status_error(resource: &str, status: u16) -> TrackerError {
    TrackerError::Status {
        url: format!("http://dtrack.test/api/v1/{}", resource),
        status,
        body: "rejected by mock".to_string(),
    }
}

impl TrackerClient for MockTrackerClient {
    fn upsert_project(
        &self,
        identity: &ProjectIdentity,
    ) -> std::result::Result<RegistrationOutcome, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.upsert_calls += 1;
        if let Some(error) = &self.upsert_failure {
            return Err(error.clone());
        }

        if state.projects.iter().any(|p| p.matches(identity)) {
            return Ok(RegistrationOutcome::AlreadyExists);
        }
        state.projects.push(ProjectRecord {
            name: identity.name().to_string(),
            version: Some(identity.version().to_string()),
            uuid: Uuid::new_v4(),
            active: true,
        });
        Ok(RegistrationOutcome::Created)
    }

    fn find_projects(
        &self,
        identity: &ProjectIdentity,
    ) -> std::result::Result<Vec<ProjectRecord>, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.find_calls += 1;
        Ok(state
            .projects
            .iter()
            .filter(|p| p.matches(identity))
            .cloned()
            .collect())
    }

    fn upload_bom(
        &self,
        identity: &ProjectIdentity,
        _artifact: &SbomArtifact,
        content: Vec<u8>,
    ) -> std::result::Result<BomUploadReceipt, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.upload_calls += 1;
        if let Some(error) = &self.upload_failure {
            return Err(error.clone());
        }
        state.uploads.push((identity.to_string(), content.len()));
        Ok(BomUploadReceipt {
            token: Some(Uuid::new_v4().to_string()),
        })
    }
}
