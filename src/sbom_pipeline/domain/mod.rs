pub mod api_key;
pub mod build_system;
pub mod project;
pub mod sbom_artifact;
pub mod tracker_endpoint;

pub use api_key::ApiKey;
pub use build_system::BuildSystem;
pub use project::{ProjectIdentity, ProjectRecord};
pub use sbom_artifact::{SbomArtifact, SbomFormat};
pub use tracker_endpoint::TrackerEndpoint;
