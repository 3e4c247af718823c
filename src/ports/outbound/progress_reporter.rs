/// ProgressReporter port for console status lines
///
/// This port abstracts progress reporting (e.g., to stderr) so the use
/// cases can describe what they are doing without knowing about terminals.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a batch of files
    ///
    /// # Arguments
    /// * `current` - Number of files handled so far
    /// * `total` - Number of files in the batch
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a component that matched a search
    fn report_match(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);
}
