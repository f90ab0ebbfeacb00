use crate::ports::outbound::TrackerClient;
use crate::sbom_pipeline::domain::ProjectIdentity;
use crate::sbom_pipeline::policies::{Resolution, ResolutionPolicy};
use crate::shared::error::PipelineError;
use crate::shared::Result;
use tracing::{debug, warn};
use uuid::Uuid;

/// ProjectResolver stage: finds the tracker UUID of a project
///
/// The lookup runs after registration, so an empty result means the
/// tracker did not persist the project or the key cannot see it.
pub struct ProjectResolver<'a, TC> {
    tracker: &'a TC,
    policy: ResolutionPolicy,
}

impl<'a, TC: TrackerClient> ProjectResolver<'a, TC> {
    pub fn new(tracker: &'a TC, policy: ResolutionPolicy) -> Self {
        Self { tracker, policy }
    }

    pub fn resolve_uuid(&self, identity: &ProjectIdentity) -> Result<Uuid> {
        let records =
            self.tracker
                .find_projects(identity)
                .map_err(|e| PipelineError::ResolutionNotFound {
                    project: identity.to_string(),
                    cause: e.to_string(),
                })?;
        debug!(project = %identity, matches = records.len(), "project lookup returned");

        match self.policy.select(identity, records) {
            Resolution::Selected { record, candidates } => {
                if candidates > 1 {
                    warn!(
                        project = %identity,
                        candidates,
                        uuid = %record.uuid,
                        "several tracker projects match; using the first one returned"
                    );
                }
                Ok(record.uuid)
            }
            Resolution::NotFound => Err(PipelineError::ResolutionNotFound {
                project: identity.to_string(),
                cause: format!("lookup with policy '{}' returned no project", self.policy),
            }
            .into()),
            Resolution::Ambiguous { count } => Err(PipelineError::ResolutionAmbiguous {
                project: identity.to_string(),
                count,
            }
            .into()),
        }
    }
}
