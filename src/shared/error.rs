use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The SBOM was generated, uploaded and the project link reported
    Success = 0,
    /// A pipeline stage (detection, generation, tracker call) failed
    StageFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Configuration or other application error before the pipeline started
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an error returned from the application
    pub fn from_error(error: &anyhow::Error) -> Self {
        if error.downcast_ref::<PipelineError>().is_some() {
            ExitCode::StageFailed
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::StageFailed => write!(f, "Stage Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Detection,
    Generation,
    Registration,
    Resolution,
    Upload,
    Reporting,
}

impl Stage {
    /// All stages in the order the pipeline runs them
    pub const ALL: [Stage; 6] = [
        Stage::Detection,
        Stage::Generation,
        Stage::Registration,
        Stage::Resolution,
        Stage::Upload,
        Stage::Reporting,
    ];

    /// 1-based position of the stage in the pipeline
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|stage| *stage == self)
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Detection => "Detection",
            Stage::Generation => "Generation",
            Stage::Registration => "Registration",
            Stage::Resolution => "Resolution",
            Stage::Upload => "Upload",
            Stage::Reporting => "Reporting",
        };
        write!(f, "{}", name)
    }
}

/// Stage failures of the SBOM publishing pipeline.
///
/// Every variant is fatal. The message always names the stage and the
/// underlying cause (exit code, HTTP status or missing file).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("[Detection] No pom.xml or build.gradle found in {path}\n\n💡 Hint: Run from the root of a Maven or Gradle project, or pass the project directory with --path")]
    Detection { path: PathBuf },

    #[error("[Generation] {details}\n\n💡 Hint: {hint}")]
    Generation { details: String, hint: String },

    #[error("[Registration] Failed to create or update project {project}\nCause: {cause}\n\n💡 Hint: Check the tracker URL and that the API key has the PORTFOLIO_MANAGEMENT permission")]
    Registration { project: String, cause: String },

    #[error("[Resolution] No tracker project matches {project}\nCause: {cause}\n\n💡 Hint: Verify the project was registered and the API key can view it")]
    ResolutionNotFound { project: String, cause: String },

    #[error("[Resolution] {count} tracker projects match {project}; the resolution policy requires exactly one\n\n💡 Hint: Use a unique project name/version or switch --resolution-policy")]
    ResolutionAmbiguous { project: String, count: usize },

    #[error("[Upload] Failed to upload SBOM for {project}\nCause: {cause}\n\n💡 Hint: Check that the API key has the BOM_UPLOAD permission")]
    Upload { project: String, cause: String },
}

impl PipelineError {
    /// The stage that produced this error
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Detection { .. } => Stage::Detection,
            PipelineError::Generation { .. } => Stage::Generation,
            PipelineError::Registration { .. } => Stage::Registration,
            PipelineError::ResolutionNotFound { .. } | PipelineError::ResolutionAmbiguous { .. } => {
                Stage::Resolution
            }
            PipelineError::Upload { .. } => Stage::Upload,
        }
    }

    pub fn generation(details: impl Into<String>, hint: impl Into<String>) -> Self {
        PipelineError::Generation {
            details: details.into(),
            hint: hint.into(),
        }
    }
}

/// Application-specific errors raised outside the pipeline stages.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Missing required setting: {setting}\n\n💡 Hint: {hint}")]
    MissingSetting { setting: String, hint: String },
}
