use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::ReportFormat;
use crate::sbom_pipeline::policies::ResolutionPolicy;

/// Generate a CycloneDX SBOM for a Maven or Gradle project and publish it to Dependency-Track
#[derive(Parser, Debug)]
#[command(name = "java-sbom-uploader")]
#[command(version)]
#[command(
    about = "Generate a CycloneDX SBOM for a Maven or Gradle project and publish it to Dependency-Track",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Path to a config file (defaults to sbom-uploader.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dependency-Track API server base URL
    #[arg(long, env = "DEPENDENCY_TRACK_URL", value_name = "URL")]
    pub tracker_url: Option<String>,

    /// Dependency-Track frontend base URL used for the project link
    #[arg(long, env = "DEPENDENCY_TRACK_FRONTEND_URL", value_name = "URL")]
    pub frontend_url: Option<String>,

    /// Dependency-Track API key (prefer the environment variable)
    #[arg(long, env = "DEPENDENCY_TRACK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Project name in Dependency-Track
    #[arg(short = 'n', long, env = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Project version in Dependency-Track [default: 1.0.0]
    #[arg(long, env = "PROJECT_VERSION")]
    pub project_version: Option<String>,

    /// URL of the repository the project was checked out from
    #[arg(long, env = "REPO_URL", value_name = "URL")]
    pub repo_url: Option<String>,

    /// Branch, tag or commit of the checkout
    #[arg(long, env = "REPO_REF", value_name = "REF")]
    pub repo_ref: Option<String>,

    /// Where the SBOM is written, relative to the project directory [default: target/sbom.json]
    #[arg(long, value_name = "PATH")]
    pub sbom_output: Option<PathBuf>,

    /// How to pick a project when the lookup returns several: first-match, unique or exact
    #[arg(long, value_name = "POLICY")]
    pub resolution_policy: Option<ResolutionPolicy>,

    /// Upload an existing SBOM instead of running the build tool
    #[arg(long)]
    pub skip_build: bool,

    /// Also write a run report to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Run report format: text, markdown or json
    #[arg(long, default_value = "markdown")]
    pub report_format: ReportFormat,

    /// Log debug output (build commands, tracker requests) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
