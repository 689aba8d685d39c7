use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for status lines on stderr
///
/// Keeps stdout free for the rendered report so it can be piped or redirected.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        eprintln!("{}", message);
    }
}
