/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and results back out to the
/// adapters, keeping the domain layer isolated.
mod browse_request;
mod browse_response;
mod build_request;
mod build_response;
mod output_format;

pub use browse_request::BrowseRequest;
pub use browse_response::BrowseResponse;
pub use build_request::{BuildRequest, SelectionSpec};
pub use build_response::BuildResponse;
pub use output_format::OutputFormat;
