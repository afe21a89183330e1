/// Crate-wide result type. Fatal, user-facing failures are
/// [`LicenseCheckError`](crate::shared::error::LicenseCheckError) values wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
