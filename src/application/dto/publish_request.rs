use super::GeneratorSettings;
use crate::sbom_pipeline::domain::ProjectIdentity;
use crate::sbom_pipeline::policies::ResolutionPolicy;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// Source repository the working directory was checked out from
///
/// Informational only: it is logged and included in the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub url: String,
    pub reference: Option<String>,
}

/// PublishRequest - Internal request DTO for the SBOM publishing use case
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// Checked-out project root
    pub working_dir: PathBuf,
    /// Tracker project key
    pub identity: ProjectIdentity,
    /// Base URL used for the project link
    pub link_base_url: String,
    pub generator: GeneratorSettings,
    pub resolution_policy: ResolutionPolicy,
    pub repository: Option<RepositoryRef>,
}

impl PublishRequest {
    pub fn builder() -> PublishRequestBuilder {
        PublishRequestBuilder::default()
    }
}

/// Builder for [`PublishRequest`]
#[derive(Debug, Default)]
pub struct PublishRequestBuilder {
    working_dir: Option<PathBuf>,
    identity: Option<ProjectIdentity>,
    link_base_url: Option<String>,
    generator: GeneratorSettings,
    resolution_policy: ResolutionPolicy,
    repository: Option<RepositoryRef>,
}

impl PublishRequestBuilder {
    pub fn working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }

    pub fn identity(mut self, identity: ProjectIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn link_base_url(mut self, url: impl Into<String>) -> Self {
        self.link_base_url = Some(url.into());
        self
    }

    pub fn generator(mut self, generator: GeneratorSettings) -> Self {
        self.generator = generator;
        self
    }

    pub fn resolution_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.resolution_policy = policy;
        self
    }

    pub fn repository(mut self, repository: Option<RepositoryRef>) -> Self {
        self.repository = repository;
        self
    }

    pub fn build(self) -> Result<PublishRequest> {
        let identity = self.identity.ok_or_else(|| SbomError::Validation {
            message: "project identity is required".to_string(),
        })?;
        let link_base_url = self
            .link_base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| SbomError::Validation {
                message: "link base URL is required".to_string(),
            })?;

        Ok(PublishRequest {
            working_dir: self.working_dir.unwrap_or_else(|| PathBuf::from(".")),
            identity,
            link_base_url,
            generator: self.generator,
            resolution_policy: self.resolution_policy,
            repository: self.repository,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> ProjectIdentity {
        ProjectIdentity::new("kafka", "4.1.0").unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let request = PublishRequest::builder()
            .identity(identity())
            .link_base_url("http://dtrack:8080")
            .build()
            .unwrap();

        assert_eq!(request.working_dir, PathBuf::from("."));
        assert_eq!(request.resolution_policy, ResolutionPolicy::FirstMatch);
        assert_eq!(request.generator, GeneratorSettings::default());
        assert!(request.repository.is_none());
    }

    #[test]
    fn test_builder_all_fields() {
        let request = PublishRequest::builder()
            .working_dir("/builds/kafka")
            .identity(identity())
            .link_base_url("https://dtrack.example.com")
            .resolution_policy(ResolutionPolicy::Unique)
            .repository(Some(RepositoryRef {
                url: "https://github.com/apache/kafka.git".to_string(),
                reference: Some("refs/tags/4.1.0".to_string()),
            }))
            .build()
            .unwrap();

        assert_eq!(request.working_dir, PathBuf::from("/builds/kafka"));
        assert_eq!(request.resolution_policy, ResolutionPolicy::Unique);
        assert_eq!(
            request.repository.unwrap().reference.as_deref(),
            Some("refs/tags/4.1.0")
        );
    }

    #[test]
    fn test_builder_requires_identity() {
        let result = PublishRequest::builder()
            .link_base_url("http://dtrack:8080")
            .build();
        assert!(result.unwrap_err().to_string().contains("project identity"));
    }

    #[test]
    fn test_builder_requires_link_base_url() {
        let result = PublishRequest::builder()
            .identity(identity())
            .link_base_url("  ")
            .build();
        assert!(result.unwrap_err().to_string().contains("link base URL"));
    }
}
