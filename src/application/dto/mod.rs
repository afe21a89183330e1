/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the formatters,
/// keeping the domain layer isolated.
mod license_check_request;
mod license_check_response;
mod output_format;

pub use license_check_request::{LicenseCheckRequest, LicenseCheckRequestBuilder};
pub use license_check_response::LicenseCheckResponse;
pub use output_format::OutputFormat;
