use crate::license_compliance::domain::{LicenseInfo, PackageManifest};
use crate::ports::outbound::LicenseAnnotator;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// File name prefixes recognised as license texts, compared case-insensitively
const LICENSE_FILE_PREFIXES: [&str; 3] = ["license", "licence", "copying"];

const SEE_LICENSE_IN: &str = "SEE LICENSE IN ";

/// ManifestLicenseAnnotator adapter deriving license info from `package.json`
///
/// Resolution order:
/// 1. `license` string or `{ "type": ... }` object
/// 2. `SEE LICENSE IN <file>` pointing into the package directory
/// 3. legacy `licenses` array, joined with ` OR `
/// 4. a `LICENSE*`, `LICENCE*` or `COPYING*` file in the package directory
pub struct ManifestLicenseAnnotator;

impl ManifestLicenseAnnotator {
    pub fn new() -> Self {
        Self
    }

    /// License info declared in the manifest itself, if any
    pub fn from_manifest(manifest: &PackageManifest, install_path: &Path) -> Option<LicenseInfo> {
        if let Some(expression) = manifest.license.as_ref().and_then(|l| l.as_expression()) {
            return Some(match expression.strip_prefix(SEE_LICENSE_IN) {
                Some(file) => {
                    LicenseInfo::from_file(install_path.join(file.trim()).display().to_string())
                }
                None => LicenseInfo::declared(expression),
            });
        }

        let legacy: Vec<&str> = manifest
            .licenses
            .iter()
            .flatten()
            .filter_map(|l| l.as_expression())
            .collect();
        match legacy.as_slice() {
            [] => None,
            [single] => Some(LicenseInfo::declared(*single)),
            many => Some(LicenseInfo::declared(format!("({})", many.join(" OR ")))),
        }
    }

    fn is_license_file_name(file_name: &str) -> bool {
        let lower = file_name.to_ascii_lowercase();
        LICENSE_FILE_PREFIXES
            .iter()
            .any(|prefix| lower.starts_with(prefix))
    }

    /// First license-looking file in the package directory, by file name
    async fn find_license_file(install_path: &Path) -> Result<Option<String>> {
        let mut entries = match tokio::fs::read_dir(install_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to list {}: {}",
                    install_path.display(),
                    e
                ))
            }
        };

        let mut candidates = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if Self::is_license_file_name(&file_name) && entry.file_type().await?.is_file() {
                candidates.push(file_name);
            }
        }
        // directory order is platform dependent
        candidates.sort();

        Ok(candidates
            .into_iter()
            .next()
            .map(|name| install_path.join(name).display().to_string()))
    }
}

impl Default for ManifestLicenseAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LicenseAnnotator for ManifestLicenseAnnotator {
    async fn annotate(
        &self,
        manifest: &PackageManifest,
        install_path: &Path,
    ) -> Result<LicenseInfo> {
        if let Some(info) = Self::from_manifest(manifest, install_path) {
            return Ok(info);
        }

        Ok(Self::find_license_file(install_path)
            .await?
            .map(LicenseInfo::from_file)
            .unwrap_or_else(LicenseInfo::unknown))
    }
}
