use std::path::PathBuf;

/// Canonical location of the generated SBOM, relative to the working directory
pub const DEFAULT_SBOM_OUTPUT: &str = "target/sbom.json";

/// Where the CycloneDX Maven plugin writes with `outputName=sbom`
pub const DEFAULT_MAVEN_OUTPUT: &str = "target/sbom.json";

/// Where the CycloneDX Gradle plugin writes by default
pub const DEFAULT_GRADLE_OUTPUT: &str = "build/reports/bom.json";

pub const DEFAULT_MAVEN_PLUGIN_VERSION: &str = "2.7.9";
pub const DEFAULT_GRADLE_PLUGIN_VERSION: &str = "1.7.5";

/// GeneratorSettings - tool chain and output path mapping for SBOM generation
///
/// All paths are relative to the working directory. When a tool's default
/// output differs from `sbom_output`, the generator copies the file to
/// `sbom_output` after the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub sbom_output: PathBuf,
    pub maven_output: PathBuf,
    pub gradle_output: PathBuf,
    pub maven_plugin_version: String,
    pub gradle_plugin_version: String,
    /// Reuse an SBOM produced by an earlier step instead of running the build
    pub skip_build: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            sbom_output: PathBuf::from(DEFAULT_SBOM_OUTPUT),
            maven_output: PathBuf::from(DEFAULT_MAVEN_OUTPUT),
            gradle_output: PathBuf::from(DEFAULT_GRADLE_OUTPUT),
            maven_plugin_version: DEFAULT_MAVEN_PLUGIN_VERSION.to_string(),
            gradle_plugin_version: DEFAULT_GRADLE_PLUGIN_VERSION.to_string(),
            skip_build: false,
        }
    }
}
