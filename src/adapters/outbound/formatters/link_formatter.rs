use crate::application::dto::PublishResponse;
use crate::ports::outbound::ReportFormatter;
use crate::sbom_pipeline::services::ResultReporter;
use crate::shared::Result;

/// LinkFormatter adapter: the single line pointing at the project page
pub struct LinkFormatter;

impl LinkFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinkFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for LinkFormatter {
    fn format(&self, response: &PublishResponse) -> Result<String> {
        Ok(ResultReporter::summary_line(&response.project_link))
    }
}
