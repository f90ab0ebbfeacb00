use crate::shared::Result;

/// OutputPresenter port for presenting the run result
///
/// This port abstracts where the final link or run report goes
/// (stdout, a report file, etc.).
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
