//! Configuration file support for java-sbom-uploader.
//!
//! Provides YAML-based configuration through `sbom-uploader.config.yml` files
//! and merges it with command-line flags and environment variables into
//! [`PipelineSettings`]. Precedence: CLI flag, then environment, then config
//! file, then built-in default.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::adapters::outbound::network::DependencyTrackClient;
use crate::application::dto::{GeneratorSettings, ReportFormat, RepositoryRef};
use crate::cli::Args;
use crate::sbom_pipeline::domain::{ApiKey, ProjectIdentity, TrackerEndpoint};
use crate::sbom_pipeline::policies::ResolutionPolicy;
use crate::shared::error::SbomError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-uploader.config.yml";

pub const DEFAULT_TRACKER_URL: &str = "http://dtrack-apiserver:8080";
pub const DEFAULT_PROJECT_VERSION: &str = "1.0.0";

/// Keys that must never appear in a config file
const FORBIDDEN_KEYS: [&str; 2] = ["api_key", "apiKey"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub tracker_url: Option<String>,
    pub frontend_url: Option<String>,
    pub project_name: Option<String>,
    pub project_version: Option<String>,
    pub repo_url: Option<String>,
    pub repo_ref: Option<String>,
    pub sbom_output: Option<PathBuf>,
    pub maven_output: Option<PathBuf>,
    pub gradle_output: Option<PathBuf>,
    pub maven_plugin_version: Option<String>,
    pub gradle_plugin_version: Option<String>,
    pub resolution_policy: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(key) = FORBIDDEN_KEYS
        .iter()
        .find(|key| config.unknown_fields.contains_key(**key))
    {
        bail!(
            "Invalid config: '{}' must not be set in the config file.\n\n\
             💡 Hint: Pass the API key through the DEPENDENCY_TRACK_API_KEY environment variable.",
            key
        );
    }

    for (field, version) in [
        ("maven_plugin_version", &config.maven_plugin_version),
        ("gradle_plugin_version", &config.gradle_plugin_version),
    ] {
        if let Some(version) = version {
            validate_plugin_version(field, version)?;
        }
    }

    for (field, path) in [
        ("sbom_output", &config.sbom_output),
        ("maven_output", &config.maven_output),
        ("gradle_output", &config.gradle_output),
    ] {
        if let Some(path) = path {
            validate_relative_path(field, path)?;
        }
    }

    if config.timeout_secs == Some(0) {
        bail!("Invalid config: timeout_secs must be greater than 0.");
    }

    if let Some(policy) = &config.resolution_policy {
        policy
            .parse::<ResolutionPolicy>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }

    Ok(())
}

/// Plugin versions end up in build tool arguments and the init script
fn validate_plugin_version(field: &str, version: &str) -> Result<()> {
    let valid = !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if !valid {
        bail!(
            "Invalid config: {} '{}' may only contain letters, digits, '.' and '-'.",
            field,
            version
        );
    }
    Ok(())
}

/// Output paths must stay inside the project directory
fn validate_relative_path(field: &str, path: &Path) -> Result<()> {
    let escapes = path.is_absolute()
        || path
            .components()
            .any(|component| matches!(component, Component::ParentDir));
    if escapes || path.as_os_str().is_empty() {
        bail!(
            "Invalid config: {} '{}' must be a relative path inside the project directory.",
            field,
            path.display()
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "unknown config field ignored");
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Fully resolved settings for one pipeline run
#[derive(Debug)]
pub struct PipelineSettings {
    pub working_dir: PathBuf,
    pub endpoint: TrackerEndpoint,
    pub api_key: ApiKey,
    pub identity: ProjectIdentity,
    pub repository: Option<RepositoryRef>,
    pub generator: GeneratorSettings,
    pub resolution_policy: ResolutionPolicy,
    pub timeout: Duration,
    pub report: Option<PathBuf>,
    pub report_format: ReportFormat,
}

impl PipelineSettings {
    /// Loads the config file (explicit or discovered) and merges it with `args`
    ///
    /// # Arguments
    /// * `args` - Parsed command line; clap has already applied environment variables
    /// * `working_dir` - Validated project directory
    pub fn load(args: &Args, working_dir: &Path) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Some(load_config_from_path(path)?),
            None => discover_config(working_dir)?,
        };
        Self::merge(args, config.unwrap_or_default(), working_dir)
    }

    /// Merges command-line values over config file values over defaults
    pub fn merge(args: &Args, config: ConfigFile, working_dir: &Path) -> Result<Self> {
        let tracker_url = args
            .tracker_url
            .clone()
            .or(config.tracker_url)
            .unwrap_or_else(|| DEFAULT_TRACKER_URL.to_string());
        let frontend_url = args.frontend_url.clone().or(config.frontend_url);
        let endpoint = TrackerEndpoint::new(&tracker_url, frontend_url.as_deref())?;

        let api_key = match args.api_key.as_deref() {
            Some(key) => ApiKey::new(key)?,
            None => {
                return Err(SbomError::MissingSetting {
                    setting: "Dependency-Track API key".to_string(),
                    hint: "Set the DEPENDENCY_TRACK_API_KEY environment variable".to_string(),
                }
                .into())
            }
        };

        let project_name = args
            .project_name
            .clone()
            .or(config.project_name)
            .ok_or_else(|| SbomError::MissingSetting {
                setting: "project name".to_string(),
                hint: "Pass --project-name or set PROJECT_NAME".to_string(),
            })?;
        let project_version = args
            .project_version
            .clone()
            .or(config.project_version)
            .unwrap_or_else(|| DEFAULT_PROJECT_VERSION.to_string());
        let identity = ProjectIdentity::new(project_name, project_version)?;

        let repository = args
            .repo_url
            .clone()
            .or(config.repo_url)
            .map(|url| RepositoryRef {
                url,
                reference: args.repo_ref.clone().or(config.repo_ref),
            });

        let defaults = GeneratorSettings::default();
        let sbom_output = args.sbom_output.clone().or(config.sbom_output);
        if let Some(path) = &sbom_output {
            validate_relative_path("sbom_output", path)?;
        }
        let generator = GeneratorSettings {
            sbom_output: sbom_output.unwrap_or(defaults.sbom_output),
            maven_output: config.maven_output.unwrap_or(defaults.maven_output),
            gradle_output: config.gradle_output.unwrap_or(defaults.gradle_output),
            maven_plugin_version: config
                .maven_plugin_version
                .unwrap_or(defaults.maven_plugin_version),
            gradle_plugin_version: config
                .gradle_plugin_version
                .unwrap_or(defaults.gradle_plugin_version),
            skip_build: args.skip_build,
        };

        let resolution_policy = match (args.resolution_policy, config.resolution_policy) {
            (Some(policy), _) => policy,
            (None, Some(policy)) => policy
                .parse()
                .map_err(|e: String| SbomError::Validation { message: e })?,
            (None, None) => ResolutionPolicy::default(),
        };

        Ok(Self {
            working_dir: working_dir.to_path_buf(),
            endpoint,
            api_key,
            identity,
            repository,
            generator,
            resolution_policy,
            timeout: Duration::from_secs(config
                    .timeout_secs
                    .unwrap_or(DependencyTrackClient::DEFAULT_TIMEOUT_SECONDS)),
            report: args.report.clone(),
            report_format: args.report_format,
        })
    }
}
