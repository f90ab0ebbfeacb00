//! java-sbom-uploader - SBOM publishing tool for Maven and Gradle projects
//!
//! This library generates a CycloneDX Software Bill of Materials for a Java
//! project with the build tool's CycloneDX plugin and publishes it to a
//! Dependency-Track server, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_pipeline`): Value objects, the resolution policy
//!   and pure domain services (build system detection, link building)
//! - **Application Layer** (`application`): Stage services and the publishing use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use java_sbom_uploader::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let endpoint = TrackerEndpoint::new("http://dtrack-apiserver:8080", None)?;
//! let api_key = ApiKey::new(std::env::var("DEPENDENCY_TRACK_API_KEY")?)?;
//! let tracker = DependencyTrackClient::new(endpoint, api_key, Duration::from_secs(300))?;
//!
//! // Create use case
//! let use_case = PublishSbomUseCase::new(
//!     SystemCommandRunner::new(),
//!     tracker,
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = PublishRequest::builder()
//!     .working_dir(".")
//!     .identity(ProjectIdentity::new("my-service", "1.0.0")?)
//!     .link_base_url("http://dtrack-apiserver:8080")
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! println!("{}", LinkFormatter::new().format(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_pipeline;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonReportFormatter, LinkFormatter, MarkdownReportFormatter,
    };
    pub use crate::adapters::outbound::network::DependencyTrackClient;
    pub use crate::adapters::outbound::process::SystemCommandRunner;
    pub use crate::application::dto::{
        GeneratorSettings, PublishRequest, PublishResponse, ReportFormat, RepositoryRef,
    };
    pub use crate::application::use_cases::PublishSbomUseCase;
    pub use crate::ports::outbound::{
        BomUploadReceipt, CommandOutput, CommandRunner, CommandSpec, OutputPresenter,
        ProgressReporter, RegistrationOutcome, ReportFormatter, TrackerClient, TrackerError,
    };
    pub use crate::sbom_pipeline::domain::{
        ApiKey, BuildSystem, ProjectIdentity, ProjectRecord, SbomArtifact, SbomFormat,
        TrackerEndpoint,
    };
    pub use crate::sbom_pipeline::policies::{Resolution, ResolutionPolicy};
    pub use crate::sbom_pipeline::services::{BuildSystemDetector, ResultReporter};
    pub use crate::shared::error::{ExitCode, PipelineError, Stage};
    pub use crate::shared::Result;
}
