/// Use cases module containing application business logic orchestration
mod publish_sbom;

pub use publish_sbom::PublishSbomUseCase;
