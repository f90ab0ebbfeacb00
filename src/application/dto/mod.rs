/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod generator_settings;
mod publish_request;
mod publish_response;
mod report_format;

pub use generator_settings::{
    GeneratorSettings, DEFAULT_GRADLE_OUTPUT, DEFAULT_GRADLE_PLUGIN_VERSION, DEFAULT_MAVEN_OUTPUT,
    DEFAULT_MAVEN_PLUGIN_VERSION, DEFAULT_SBOM_OUTPUT,
};
pub use publish_request::{PublishRequest, PublishRequestBuilder, RepositoryRef};
pub use publish_response::PublishResponse;
pub use report_format::ReportFormat;
