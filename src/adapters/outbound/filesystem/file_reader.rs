use crate::adapters::outbound::lockfile::{PnpmLockfile, PnpmLockfileWalker};
use crate::license_compliance::domain::PackageManifest;
use crate::ports::outbound::{LockfileReader, ManifestReader};
use crate::shared::error::LicenseCheckError;
use crate::shared::security::{read_checked, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

const LOCKFILE_NAME: &str = "pnpm-lock.yaml";
const MANIFEST_NAME: &str = "package.json";

/// FileSystemReader adapter for reading files from the file system
///
/// Implements both LockfileReader and ManifestReader: the lockfile is read
/// with the full security checks, installed manifests on a best-effort basis.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    type Walker = PnpmLockfileWalker;

    fn read_lockfile(&self, project_path: &Path) -> Result<PnpmLockfileWalker> {
        let lockfile_path = project_path.join(LOCKFILE_NAME);

        if !lockfile_path.exists() {
            return Err(LicenseCheckError::LockfileNotFound {
                path: lockfile_path.clone(),
                suggestion: format!(
                    "pnpm-lock.yaml does not exist in project directory \"{}\".\n   \
                     Run `pnpm install` first, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        let content = read_checked(&lockfile_path, LOCKFILE_NAME).map_err(|e| {
            LicenseCheckError::LockfileParseError {
                path: lockfile_path.clone(),
                details: e.to_string(),
            }
        })?;

        let lockfile = PnpmLockfile::from_yaml(&content).map_err(|e| {
            LicenseCheckError::LockfileParseError {
                path: lockfile_path,
                details: e.to_string(),
            }
        })?;

        Ok(PnpmLockfileWalker::new(lockfile))
    }
}

#[async_trait]
impl ManifestReader for FileSystemReader {
    async fn read_manifest(&self, package_dir: &Path) -> Option<PackageManifest> {
        let manifest_path = package_dir.join(MANIFEST_NAME);

        let metadata = tokio::fs::metadata(&manifest_path).await.ok()?;
        if !metadata.is_file() || metadata.len() > MAX_FILE_SIZE {
            return None;
        }

        let content = tokio::fs::read_to_string(&manifest_path).await.ok()?;
        serde_json::from_str(&content).ok()
    }
}
