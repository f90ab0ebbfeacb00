use crate::ports::outbound::{BomUploadReceipt, RegistrationOutcome, TrackerClient, TrackerError};
use crate::sbom_pipeline::domain::{ProjectIdentity, ProjectRecord, SbomArtifact};
use std::cell::{Cell, RefCell};
use uuid::Uuid;

/// In-memory tracker used by the stage service tests
pub(crate) struct StubTracker {
    pub upsert_result: Result<RegistrationOutcome, TrackerError>,
    pub find_result: Result<Vec<ProjectRecord>, TrackerError>,
    pub upload_result: Result<BomUploadReceipt, TrackerError>,
    pub upsert_calls: Cell<usize>,
    pub find_calls: Cell<usize>,
    pub uploads: RefCell<Vec<(String, Vec<u8>)>>,
}

impl Default for StubTracker {
    fn default() -> Self {
        Self {
            upsert_result: Ok(RegistrationOutcome::Created),
            find_result: Ok(Vec::new()),
            upload_result: Ok(BomUploadReceipt::default()),
            upsert_calls: Cell::new(0),
            find_calls: Cell::new(0),
            uploads: RefCell::new(Vec::new()),
        }
    }
}

impl TrackerClient for StubTracker {
    fn upsert_project(
        &self,
        _identity: &ProjectIdentity,
    ) -> Result<RegistrationOutcome, TrackerError> {
        self.upsert_calls.set(self.upsert_calls.get() + 1);
        self.upsert_result.clone()
    }

    fn find_projects(
        &self,
        _identity: &ProjectIdentity,
    ) -> Result<Vec<ProjectRecord>, TrackerError> {
        self.find_calls.set(self.find_calls.get() + 1);
        self.find_result.clone()
    }

    fn upload_bom(
        &self,
        identity: &ProjectIdentity,
        _artifact: &SbomArtifact,
        content: Vec<u8>,
    ) -> Result<BomUploadReceipt, TrackerError> {
        self.uploads
            .borrow_mut()
            .push((identity.to_string(), content));
        self.upload_result.clone()
    }
}

pub(crate) fn record(name: &str, version: &str, uuid: &str) -> ProjectRecord {
    ProjectRecord {
        name: name.to_string(),
        version: Some(version.to_string()),
        uuid: Uuid::parse_str(uuid).unwrap(),
        active: true,
    }
}

pub(crate) fn status_error(status: u16, body: &str) -> TrackerError {
    TrackerError::Status {
        url: "http://dtrack:8080/api/v1/project".to_string(),
        status,
        body: body.to_string(),
    }
}
