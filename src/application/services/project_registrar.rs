use crate::ports::outbound::{RegistrationOutcome, TrackerClient};
use crate::sbom_pipeline::domain::ProjectIdentity;
use crate::shared::error::PipelineError;
use crate::shared::Result;
use tracing::info;

/// ProjectRegistrar stage: makes sure the tracker knows the project
///
/// Safe to run on every pipeline execution; an existing project is not
/// an error.
pub struct ProjectRegistrar<'a, TC> {
    tracker: &'a TC,
}

impl<'a, TC: TrackerClient> ProjectRegistrar<'a, TC> {
    pub fn new(tracker: &'a TC) -> Self {
        Self { tracker }
    }

    pub fn ensure_project(&self, identity: &ProjectIdentity) -> Result<RegistrationOutcome> {
        let outcome =
            self.tracker
                .upsert_project(identity)
                .map_err(|e| PipelineError::Registration {
                    project: identity.to_string(),
                    cause: e.to_string(),
                })?;

        match outcome {
            RegistrationOutcome::Created => info!(project = %identity, "project created"),
            RegistrationOutcome::AlreadyExists => {
                info!(project = %identity, "project already registered")
            }
        }
        Ok(outcome)
    }
}
