use crate::shared::Result;

const API_PREFIX: &str = "/api/v1";

/// Normalized location of the tracker
///
/// `base_url` is the server root without a trailing slash or `/api/v1`
/// suffix. `frontend_url` is where users browse projects; it defaults to the
/// base URL when the UI is served from the same origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerEndpoint {
    base_url: String,
    frontend_url: Option<String>,
}

impl TrackerEndpoint {
    pub fn new(base_url: &str, frontend_url: Option<&str>) -> Result<Self> {
        let base_url = Self::normalize(base_url, "Tracker URL")?;
        let frontend_url = frontend_url
            .map(|url| Self::normalize(url, "Frontend URL"))
            .transpose()?;

        Ok(Self {
            base_url,
            frontend_url,
        })
    }

    fn normalize(url: &str, label: &str) -> Result<String> {
        let trimmed = url.trim();

        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            anyhow::bail!(
                "{} must start with http:// or https:// (got '{}')",
                label,
                trimmed
            );
        }

        let mut normalized = trimmed.trim_end_matches('/');
        if let Some(stripped) = normalized.strip_suffix(API_PREFIX) {
            normalized = stripped.trim_end_matches('/');
        }

        if normalized.ends_with(':') || normalized.ends_with("//") {
            anyhow::bail!("{} has no host (got '{}')", label, trimmed);
        }

        Ok(normalized.to_string())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL used for human-facing links
    pub fn frontend_url(&self) -> &str {
        self.frontend_url.as_deref().unwrap_or(&self.base_url)
    }

    /// Absolute URL of an API resource, e.g. `api_url("project")`
    pub fn api_url(&self, resource: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            API_PREFIX,
            resource.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_removed() {
        let endpoint = TrackerEndpoint::new("http://dtrack-apiserver:8080/", None).unwrap();
        assert_eq!(endpoint.base_url(), "http://dtrack-apiserver:8080");
    }

    #[test]
    fn test_api_suffix_removed() {
        let endpoint = TrackerEndpoint::new("https://dtrack.example.com/api/v1/", None).unwrap();
        assert_eq!(endpoint.base_url(), "https://dtrack.example.com");
    }

    #[test]
    fn test_api_url() {
        let endpoint = TrackerEndpoint::new("http://localhost:8081", None).unwrap();
        assert_eq!(
            endpoint.api_url("project"),
            "http://localhost:8081/api/v1/project"
        );
        assert_eq!(endpoint.api_url("/bom"), "http://localhost:8081/api/v1/bom");
    }

    #[test]
    fn test_frontend_defaults_to_base() {
        let endpoint = TrackerEndpoint::new("http://localhost:8081", None).unwrap();
        assert_eq!(endpoint.frontend_url(), "http://localhost:8081");
    }

    #[test]
    fn test_frontend_override() {
        let endpoint =
            TrackerEndpoint::new("http://apiserver:8080", Some("https://dtrack.example.com/"))
                .unwrap();
        assert_eq!(endpoint.frontend_url(), "https://dtrack.example.com");
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let result = TrackerEndpoint::new("dtrack-apiserver:8080", None);
        assert!(result.unwrap_err().to_string().contains("http://"));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(TrackerEndpoint::new("http://", None).is_err());
        assert!(TrackerEndpoint::new("https:///api/v1", None).is_err());
    }
}
