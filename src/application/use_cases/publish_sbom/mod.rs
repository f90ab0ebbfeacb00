use crate::application::dto::{PublishRequest, PublishResponse};
use crate::application::services::{
    ProjectRegistrar, ProjectResolver, SbomGenerator, SbomUploader,
};
use crate::ports::outbound::{CommandRunner, ProgressReporter, TrackerClient};
use crate::sbom_pipeline::domain::BuildSystem;
use crate::sbom_pipeline::services::{BuildSystemDetector, ResultReporter};
use crate::shared::error::{PipelineError, Stage};
use crate::shared::Result;
use chrono::Utc;
use tracing::info;

/// PublishSbomUseCase - generates an SBOM and publishes it to the tracker
///
/// Runs the stages strictly in order: detection, generation, registration,
/// resolution, upload and reporting. The first failing stage aborts the
/// run; later stages never execute.
///
/// # Type Parameters
/// * `CR` - CommandRunner implementation
/// * `TC` - TrackerClient implementation
/// * `PR` - ProgressReporter implementation
pub struct PublishSbomUseCase<CR, TC, PR> {
    command_runner: CR,
    tracker_client: TC,
    progress_reporter: PR,
}

impl<CR, TC, PR> PublishSbomUseCase<CR, TC, PR>
where
    CR: CommandRunner,
    TC: TrackerClient,
    PR: ProgressReporter,
{
    /// Creates a new PublishSbomUseCase with injected dependencies
    pub fn new(command_runner: CR, tracker_client: TC, progress_reporter: PR) -> Self {
        Self {
            command_runner,
            tracker_client,
            progress_reporter,
        }
    }

    /// Executes the publishing pipeline
    ///
    /// # Returns
    /// PublishResponse with the resolved project UUID and its link
    ///
    /// # Errors
    /// Returns a `PipelineError` naming the stage that failed
    pub fn execute(&self, request: PublishRequest) -> Result<PublishResponse> {
        if let Some(repository) = &request.repository {
            info!(
                url = %repository.url,
                reference = repository.reference.as_deref().unwrap_or("-"),
                "publishing SBOM for checkout"
            );
        }

        let build_system = self.run_stage(Stage::Detection, || self.detect(&request))?;

        let generator = SbomGenerator::new(&self.command_runner, &request.generator);
        let artifact = self.run_stage(Stage::Generation, || {
            generator.generate(build_system, &request.working_dir)
        })?;
        self.progress_reporter.report(&format!(
            "✅ Generated {} SBOM ({} bytes): {}",
            artifact.format(),
            artifact.size_bytes(),
            artifact.path().display()
        ));

        let registration = self.run_stage(Stage::Registration, || {
            ProjectRegistrar::new(&self.tracker_client).ensure_project(&request.identity)
        })?;

        let project_uuid = self.run_stage(Stage::Resolution, || {
            ProjectResolver::new(&self.tracker_client, request.resolution_policy)
                .resolve_uuid(&request.identity)
        })?;

        let receipt = self.run_stage(Stage::Upload, || {
            SbomUploader::new(&self.tracker_client).upload(&request.identity, &artifact)
        })?;

        let project_link = self.run_stage(Stage::Reporting, || {
            Ok(ResultReporter::report(&request.link_base_url, &project_uuid))
        })?;
        self.progress_reporter
            .report_completion(&format!("Published {}", request.identity));

        Ok(PublishResponse {
            identity: request.identity,
            build_system,
            artifact,
            registration,
            project_uuid,
            project_link,
            upload_token: receipt.token,
            repository: request.repository,
            completed_at: Utc::now(),
        })
    }

    fn detect(&self, request: &PublishRequest) -> Result<BuildSystem> {
        match BuildSystemDetector::detect(&request.working_dir) {
            BuildSystem::Unknown => Err(PipelineError::Detection {
                path: request.working_dir.clone(),
            }
            .into()),
            build_system => {
                self.progress_reporter
                    .report(&format!("🔍 Detected {} project", build_system));
                Ok(build_system)
            }
        }
    }

    /// Announces the stage, runs it and reports a failure before returning it
    fn run_stage<T>(&self, stage: Stage, action: impl FnOnce() -> Result<T>) -> Result<T> {
        let label = format!("{}", stage);
        self.progress_reporter
            .report_progress(stage.position(), Stage::ALL.len(), Some(&label));

        action().map_err(|error| {
            self.progress_reporter
                .report_error(&format!("❌ {} stage failed", stage));
            error
        })
    }
}
