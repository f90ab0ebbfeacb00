use std::fmt;

/// Build system of the checked-out project
///
/// Determined once per run by [`BuildSystemDetector`](crate::sbom_pipeline::services::BuildSystemDetector)
/// and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildSystem {
    Maven,
    Gradle,
    Unknown,
}

impl BuildSystem {
    /// Descriptor files that identify this build system, in probe order
    pub fn descriptors(self) -> &'static [&'static str] {
        match self {
            BuildSystem::Maven => &["pom.xml"],
            BuildSystem::Gradle => &["build.gradle", "build.gradle.kts"],
            BuildSystem::Unknown => &[],
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, BuildSystem::Unknown)
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildSystem::Maven => write!(f, "Maven"),
            BuildSystem::Gradle => write!(f, "Gradle"),
            BuildSystem::Unknown => write!(f, "Unknown"),
        }
    }
}
