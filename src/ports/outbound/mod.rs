/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod catalog_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalog_reader::CatalogReader;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
