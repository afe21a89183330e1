use async_trait::async_trait;
use pnpm_licenses::license_compliance::domain::PackageManifest;
use pnpm_licenses::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// Mock LicenseAnnotator that echoes the declared license
///
/// Packages registered with [`MockLicenseAnnotator::failing_for`] fail to
/// annotate.
#[derive(Default)]
pub struct MockLicenseAnnotator {
    failures: HashSet<String>,
}

impl MockLicenseAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(mut self, name: &str) -> Self {
        self.failures.insert(name.to_string());
        self
    }
}

#[async_trait]
impl LicenseAnnotator for MockLicenseAnnotator {
    async fn annotate(
        &self,
        manifest: &PackageManifest,
        _install_path: &Path,
    ) -> Result<LicenseInfo> {
        if let Some(name) = manifest.name.as_deref() {
            if self.failures.contains(name) {
                anyhow::bail!("Mock annotation failure for {}", name);
            }
        }
        Ok(manifest
            .license
            .as_ref()
            .and_then(|l| l.as_expression())
            .map(LicenseInfo::declared)
            .unwrap_or_default())
    }
}
