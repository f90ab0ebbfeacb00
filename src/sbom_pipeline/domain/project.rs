use crate::shared::Result;
use serde::Deserialize;
use std::fmt;
use uuid::Uuid;

/// Maximum length for project names (Dependency-Track column limit)
const MAX_PROJECT_NAME_LENGTH: usize = 255;

/// Maximum length for project versions
const MAX_PROJECT_VERSION_LENGTH: usize = 100;

/// ProjectIdentity value object: the (name, version) key of a tracker project
///
/// Both parts are trimmed and validated on construction, so every identity
/// that exists is safe to send as JSON and as a query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectIdentity {
    name: String,
    version: String,
}

impl ProjectIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        let name = Self::validate("Project name", name.into(), MAX_PROJECT_NAME_LENGTH)?;
        let version = Self::validate("Project version", version.into(), MAX_PROJECT_VERSION_LENGTH)?;
        Ok(Self { name, version })
    }

    fn validate(label: &str, value: String, max_length: usize) -> Result<String> {
        let value = value.trim().to_string();

        if value.is_empty() {
            anyhow::bail!("{} cannot be empty", label);
        }

        if value.len() > max_length {
            anyhow::bail!(
                "{} is too long ({} bytes). Maximum allowed: {} bytes",
                label,
                value.len(),
                max_length
            );
        }

        if value.chars().any(char::is_control) {
            anyhow::bail!("{} contains control characters", label);
        }

        Ok(value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Project entity as stored by the tracker
///
/// Only the fields the pipeline reads are modelled; anything else in the
/// tracker response is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    pub uuid: Uuid,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ProjectRecord {
    /// Whether this record carries exactly the given identity
    pub fn matches(&self, identity: &ProjectIdentity) -> bool {
        self.name == identity.name() && self.version.as_deref() == Some(identity.version())
    }
}
