use crate::application::dto::GeneratorSettings;
use crate::ports::outbound::{CommandOutput, CommandRunner, CommandSpec};
use crate::sbom_pipeline::domain::{BuildSystem, SbomArtifact};
use crate::shared::error::PipelineError;
use crate::shared::security::{regular_file_size, validate_file_size, MAX_SBOM_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Lines of build output attached to a generation error
const FAILURE_OUTPUT_LINES: usize = 20;

/// SbomGenerator stage: runs the CycloneDX tool chain for the detected build system
///
/// Maven runs the `makeAggregateBom` goal of the CycloneDX Maven plugin.
/// Gradle gets the CycloneDX Gradle plugin through a temporary init script
/// and runs `cyclonedxBom`. Either way the result ends up as CycloneDX JSON
/// at the canonical output path.
pub struct SbomGenerator<'a, CR> {
    command_runner: &'a CR,
    settings: &'a GeneratorSettings,
}

impl<'a, CR: CommandRunner> SbomGenerator<'a, CR> {
    pub fn new(command_runner: &'a CR, settings: &'a GeneratorSettings) -> Self {
        Self {
            command_runner,
            settings,
        }
    }

    /// Generates the SBOM and returns the artifact at the canonical path
    ///
    /// # Errors
    /// Returns `PipelineError::Generation` if the build system is unknown,
    /// the tool cannot be started, exits non-zero, or leaves no (or an
    /// empty) output file.
    pub fn generate(&self, build_system: BuildSystem, working_dir: &Path) -> Result<SbomArtifact> {
        let canonical_output = working_dir.join(&self.settings.sbom_output);

        if self.settings.skip_build {
            info!(path = %canonical_output.display(), "skipping build, reusing existing SBOM");
            return Self::inspect_output(&canonical_output, build_system);
        }

        let tool_output = match build_system {
            BuildSystem::Maven => self.run_maven(working_dir)?,
            BuildSystem::Gradle => self.run_gradle(working_dir)?,
            BuildSystem::Unknown => {
                return Err(PipelineError::generation(
                    format!(
                        "Cannot generate an SBOM: neither pom.xml nor build.gradle was found in {}",
                        working_dir.display()
                    ),
                    "Detection must succeed before generation; run from a Maven or Gradle project root",
                )
                .into())
            }
        };

        Self::reconcile_output(&tool_output, &canonical_output)?;
        Self::inspect_output(&canonical_output, build_system)
    }

    /// `./mvnw` or `./gradlew` when the project ships a wrapper, the global tool otherwise
    fn launcher(working_dir: &Path, wrapper: &str, global: &str) -> String {
        if working_dir.join(wrapper).is_file() {
            format!("./{}", wrapper)
        } else {
            global.to_string()
        }
    }

    pub(crate) fn maven_command(&self, working_dir: &Path) -> CommandSpec {
        let goal = format!(
            "org.cyclonedx:cyclonedx-maven-plugin:{}:makeAggregateBom",
            self.settings.maven_plugin_version
        );
        CommandSpec::new(Self::launcher(working_dir, "mvnw", "mvn"), working_dir).args([
            "-B".to_string(),
            goal,
            "-Dcyclonedx.outputFormat=json".to_string(),
            "-Dcyclonedx.outputName=sbom".to_string(),
        ])
    }

    pub(crate) fn gradle_command(&self, working_dir: &Path, init_script: &Path) -> CommandSpec {
        CommandSpec::new(Self::launcher(working_dir, "gradlew", "gradle"), working_dir).args([
            "-I".to_string(),
            init_script.display().to_string(),
            "cyclonedxBom".to_string(),
            "-Dcyclonedx.outputFormat=json".to_string(),
        ])
    }

    /// Init script adding the CycloneDX plugin to the root project
    pub(crate) fn gradle_init_script(&self) -> String {
        format!(
            r#"initscript {{
    repositories {{
        mavenCentral()
    }}
    dependencies {{
        classpath 'org.cyclonedx:cyclonedx-gradle-plugin:{}'
    }}
}}
rootProject {{
    apply plugin: 'org.cyclonedx.bom'
}}
"#,
            self.settings.gradle_plugin_version
        )
    }

    fn run_maven(&self, working_dir: &Path) -> Result<PathBuf> {
        let command = self.maven_command(working_dir);
        self.run_tool(&command)?;
        Ok(working_dir.join(&self.settings.maven_output))
    }

    fn run_gradle(&self, working_dir: &Path) -> Result<PathBuf> {
        // Removed when `init_script` drops at the end of this function
        let mut init_script = tempfile::Builder::new()
            .prefix("cyclonedx.")
            .suffix(".init.gradle")
            .tempfile_in(working_dir)
            .map_err(|e| {
                PipelineError::generation(
                    format!(
                        "Failed to create Gradle init script in {}: {}",
                        working_dir.display(),
                        e
                    ),
                    "The working directory must be writable",
                )
            })?;
        init_script
            .write_all(self.gradle_init_script().as_bytes())
            .and_then(|_| init_script.flush())
            .map_err(|e| {
                PipelineError::generation(
                    format!("Failed to write Gradle init script: {}", e),
                    "The working directory must be writable",
                )
            })?;
        debug!(path = %init_script.path().display(), "wrote Gradle init script");

        let command = self.gradle_command(working_dir, init_script.path());
        self.run_tool(&command)?;
        Ok(working_dir.join(&self.settings.gradle_output))
    }

    fn run_tool(&self, command: &CommandSpec) -> Result<CommandOutput> {
        let output = self.command_runner.run(command).map_err(|e| {
            PipelineError::generation(
                format!("Failed to run `{}`: {}", command, e),
                format!("Make sure '{}' is installed and on PATH", command.program()),
            )
        })?;

        if !output.success() {
            let tail = output.tail(FAILURE_OUTPUT_LINES);
            let details = if tail.is_empty() {
                format!("`{}` failed with {}", command, output.status_description())
            } else {
                format!(
                    "`{}` failed with {}\nLast build output:\n{}",
                    command,
                    output.status_description(),
                    tail
                )
            };
            return Err(PipelineError::generation(
                details,
                "Fix the build so it succeeds locally, then re-run; run with -v to log the full output",
            )
            .into());
        }

        Ok(output)
    }

    /// Copies the tool's output to the canonical path when the two differ
    fn reconcile_output(tool_output: &Path, canonical_output: &Path) -> Result<()> {
        if tool_output == canonical_output {
            return Ok(());
        }

        if !tool_output.is_file() {
            return Err(PipelineError::generation(
                format!(
                    "Build succeeded but produced no SBOM at {}",
                    tool_output.display()
                ),
                "Check the configured tool output path (gradle_output / maven_output)",
            )
            .into());
        }

        if let Some(parent) = canonical_output.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PipelineError::generation(
                    format!("Failed to create {}: {}", parent.display(), e),
                    "The working directory must be writable",
                )
            })?;
        }

        fs::copy(tool_output, canonical_output).map_err(|e| {
            PipelineError::generation(
                format!(
                    "Failed to copy {} to {}: {}",
                    tool_output.display(),
                    canonical_output.display(),
                    e
                ),
                "The working directory must be writable",
            )
        })?;
        debug!(
            from = %tool_output.display(),
            to = %canonical_output.display(),
            "copied SBOM to canonical location"
        );
        Ok(())
    }

    /// Validates the canonical output and wraps it as an artifact
    fn inspect_output(path: &Path, build_system: BuildSystem) -> Result<SbomArtifact> {
        let size = regular_file_size(path, "SBOM").map_err(|e| {
            PipelineError::generation(
                format!("{} build produced no SBOM: {}", build_system, e),
                "Check the build output; with --skip-build the SBOM must already exist",
            )
        })?;

        if size == 0 {
            return Err(PipelineError::generation(
                format!("SBOM at {} is empty", path.display()),
                "Check the CycloneDX plugin output in the build log",
            )
            .into());
        }

        validate_file_size(size, path, MAX_SBOM_SIZE)
            .map_err(|e| PipelineError::generation(e.to_string(), "Split the project or exclude test scopes"))?;

        Ok(SbomArtifact::cyclonedx_json(path.to_path_buf(), size))
    }
}
