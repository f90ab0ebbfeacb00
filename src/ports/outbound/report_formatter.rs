use crate::application::dto::PublishResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering the result of a pipeline run
///
/// Implementations only see the response, which carries no credentials.
pub trait ReportFormatter {
    /// Renders the response as a string in the formatter's format
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &PublishResponse) -> Result<String>;
}
