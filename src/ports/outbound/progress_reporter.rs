/// ProgressReporter port for status and warning messages
///
/// Implementations must keep these messages off stdout so the formatted
/// report can be piped.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
