use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Factory for choosing where the rendered report goes
pub struct PresenterFactory;

impl PresenterFactory {
    /// Writes to `output` when given, otherwise to stdout
    pub fn for_output(output: Option<PathBuf>) -> Box<dyn OutputPresenter> {
        match output {
            Some(path) => Box::new(FileSystemWriter::new(path)),
            None => Box::new(StdoutPresenter::new()),
        }
    }
}
