use crate::ports::outbound::{BomUploadReceipt, TrackerClient};
use crate::sbom_pipeline::domain::{ProjectIdentity, SbomArtifact};
use crate::shared::error::PipelineError;
use crate::shared::security::{regular_file_size, validate_file_size, MAX_SBOM_SIZE};
use crate::shared::Result;
use std::fs;
use tracing::info;

/// SbomUploader stage: sends the generated SBOM to the tracker
///
/// The file is checked before any network traffic. A missing, empty or
/// oversized SBOM never reaches the tracker.
pub struct SbomUploader<'a, TC> {
    tracker: &'a TC,
}

impl<'a, TC: TrackerClient> SbomUploader<'a, TC> {
    pub fn new(tracker: &'a TC) -> Self {
        Self { tracker }
    }

    pub fn upload(
        &self,
        identity: &ProjectIdentity,
        artifact: &SbomArtifact,
    ) -> Result<BomUploadReceipt> {
        let path = artifact.path();
        let size = regular_file_size(path, "SBOM").map_err(|e| {
            PipelineError::generation(
                e.to_string(),
                "The SBOM must exist before upload; check the generation step",
            )
        })?;
        if size == 0 {
            return Err(PipelineError::generation(
                format!("SBOM at {} is empty; refusing to upload", path.display()),
                "Check the CycloneDX plugin output in the build log",
            )
            .into());
        }
        validate_file_size(size, path, MAX_SBOM_SIZE).map_err(|e| {
            PipelineError::generation(e.to_string(), "Split the project or exclude test scopes")
        })?;

        let content = fs::read(path).map_err(|e| {
            PipelineError::generation(
                format!("Failed to read SBOM {}: {}", path.display(), e),
                "Check file permissions in the working directory",
            )
        })?;

        let receipt = self
            .tracker
            .upload_bom(identity, artifact, content)
            .map_err(|e| PipelineError::Upload {
                project: identity.to_string(),
                cause: e.to_string(),
            })?;

        info!(
            project = %identity,
            bytes = size,
            token = receipt.token.as_deref().unwrap_or("-"),
            "SBOM uploaded"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{status_error, StubTracker};
    use tempfile::TempDir;

    fn identity() -> ProjectIdentity {
        ProjectIdentity::new("kafka", "4.1.0").unwrap()
    }

    fn artifact_with(dir: &TempDir, content: &str) -> SbomArtifact {
        let path = dir.path().join("sbom.json");
        fs::write(&path, content).unwrap();
        SbomArtifact::cyclonedx_json(path, content.len() as u64)
    }

    #[test]
    fn test_upload_sends_file_content() {
        let dir = TempDir::new().unwrap();
        let artifact = artifact_with(&dir, "{\"bomFormat\":\"CycloneDX\"}");
        let tracker = StubTracker {
            upload_result: Ok(BomUploadReceipt {
                token: Some("token-1".to_string()),
            }),
            ..StubTracker::default()
        };

        let receipt = SbomUploader::new(&tracker)
            .upload(&identity(), &artifact)
            .unwrap();

        assert_eq!(receipt.token.as_deref(), Some("token-1"));
        let uploads = tracker.uploads.borrow();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].0, "kafka@4.1.0");
        assert_eq!(uploads[0].1, b"{\"bomFormat\":\"CycloneDX\"}".to_vec());
    }

    #[test]
    fn test_missing_file_makes_no_network_call() {
        let dir = TempDir::new().unwrap();
        let artifact = SbomArtifact::cyclonedx_json(dir.path().join("sbom.json"), 10);
        let tracker = StubTracker::default();

        let error = SbomUploader::new(&tracker)
            .upload(&identity(), &artifact)
            .unwrap_err();

        assert!(error.to_string().contains("SBOM not found"));
        assert!(tracker.uploads.borrow().is_empty());
    }

    #[test]
    fn test_empty_file_makes_no_network_call() {
        let dir = TempDir::new().unwrap();
        let artifact = artifact_with(&dir, "");
        let tracker = StubTracker::default();

        let error = SbomUploader::new(&tracker)
            .upload(&identity(), &artifact)
            .unwrap_err();

        assert!(error.to_string().contains("is empty"));
        assert!(tracker.uploads.borrow().is_empty());
    }

    #[test]
    fn test_rejected_upload_is_upload_error() {
        let dir = TempDir::new().unwrap();
        let artifact = artifact_with(&dir, "{}");
        let tracker = StubTracker {
            upload_result: Err(status_error(403, "Forbidden")),
            ..StubTracker::default()
        };

        let error = SbomUploader::new(&tracker)
            .upload(&identity(), &artifact)
            .unwrap_err();

        let message = error.to_string();
        assert!(message.contains("[Upload]"));
        assert!(message.contains("HTTP 403"));
        assert!(matches!(
            error.downcast_ref::<PipelineError>(),
            Some(PipelineError::Upload { .. })
        ));
    }
}
