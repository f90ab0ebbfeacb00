use crate::shared::Result;
use std::fmt;

/// Secret handle for the tracker API key
///
/// The raw value is only reachable through [`ApiKey::expose`]. `Debug`
/// prints a placeholder; the type implements neither `Display` nor
/// `Serialize`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            anyhow::bail!("API key cannot be empty");
        }

        // Header values must be visible ASCII
        if !value.chars().all(|c| c.is_ascii_graphic()) {
            anyhow::bail!("API key contains characters that are not allowed in an HTTP header");
        }

        Ok(Self(value))
    }

    /// Raw key for the `X-Api-Key` header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(***)")
    }
}
