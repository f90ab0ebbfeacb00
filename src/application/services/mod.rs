//! Stage services that drive the outbound ports
//!
//! Each service turns port-level failures into the matching
//! `PipelineError`, so the use case only sequences stages.

mod project_registrar;
mod project_resolver;
mod sbom_generator;
mod sbom_uploader;

#[cfg(test)]
pub(crate) mod test_support;

pub use project_registrar::ProjectRegistrar;
pub use project_resolver::ProjectResolver;
pub use sbom_generator::SbomGenerator;
pub use sbom_uploader::SbomUploader;
