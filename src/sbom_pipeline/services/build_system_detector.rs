use crate::sbom_pipeline::domain::BuildSystem;
use std::path::Path;

/// BuildSystemDetector service for classifying a working directory
///
/// Detection is an existence probe on the descriptor files at the root of
/// the directory. Descriptors are never parsed. Maven is probed first, so a
/// directory with both a `pom.xml` and a Gradle build file is Maven.
pub struct BuildSystemDetector;

impl BuildSystemDetector {
    /// Probe order; the first build system with a descriptor present wins
    const PROBE_ORDER: [BuildSystem; 2] = [BuildSystem::Maven, BuildSystem::Gradle];

    /// Classifies the working directory
    ///
    /// # Returns
    /// `BuildSystem::Unknown` when no descriptor is present. Turning that
    /// into a failure is the caller's decision.
    pub fn detect(working_dir: &Path) -> BuildSystem {
        Self::PROBE_ORDER
            .into_iter()
            .find(|build_system| {
                build_system
                    .descriptors()
                    .iter()
                    .any(|descriptor| working_dir.join(descriptor).is_file())
            })
            .unwrap_or(BuildSystem::Unknown)
    }
}
