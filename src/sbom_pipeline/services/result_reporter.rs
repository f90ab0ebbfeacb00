use uuid::Uuid;

/// ResultReporter service for building the link to an uploaded project
pub struct ResultReporter;

impl ResultReporter {
    /// Builds the deep link to the project's page in the tracker UI
    ///
    /// # Arguments
    /// * `tracker_base_url` - Frontend base URL; a trailing slash is ignored
    /// * `project_uuid` - UUID resolved for the project
    pub fn report(tracker_base_url: &str, project_uuid: &Uuid) -> String {
        format!(
            "{}/project/{}",
            tracker_base_url.trim_end_matches('/'),
            project_uuid
        )
    }

    /// One-line message shown to the user after a successful run
    pub fn summary_line(link: &str) -> String {
        format!("View your SBOM and vulnerabilities at: {}", link)
    }
}
