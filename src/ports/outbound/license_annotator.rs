use crate::license_compliance::domain::{LicenseInfo, PackageManifest};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// LicenseAnnotator port for determining a single package's license
///
/// # Async Support
/// Sibling packages are annotated concurrently, so implementations must be
/// `Send + Sync`.
#[async_trait]
pub trait LicenseAnnotator: Send + Sync {
    /// Determines the license of the package installed at `install_path`
    ///
    /// # Errors
    /// Implementations may fail (e.g. an unreadable directory); callers
    /// degrade the package to an unknown license instead of aborting.
    async fn annotate(&self, manifest: &PackageManifest, install_path: &Path)
        -> Result<LicenseInfo>;
}
