/// ProgressReporter port for reporting pipeline progress
///
/// This port abstracts user feedback (e.g., to stderr) while the
/// pipeline waits on long-running builds and tracker calls.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports that step `current` of `total` has started
    ///
    /// # Arguments
    /// * `current` - 1-based index of the step
    /// * `total` - Number of steps
    /// * `message` - Optional description of the step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the whole operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
