/// ProgressReporter port for user-facing progress and warnings
///
/// Output goes to a side channel (stderr) so the report on stdout stays
/// machine-readable.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports how many packages have been processed so far
    ///
    /// `total` is `None` while the size of the walk is still unknown.
    fn report_progress(&self, current: usize, total: Option<usize>, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
