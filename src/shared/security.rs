use crate::shared::error::LicenseCheckError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any file we read (lockfile, config, manifests).
/// pnpm lockfiles of large monorepos reach tens of megabytes; 100 MB is the cap.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects paths that are symbolic links.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn ensure_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| LicenseCheckError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata for {} operation: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(LicenseCheckError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point the tool at the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that `path` is a regular file within [`MAX_FILE_SIZE`] and returns its size.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than [`MAX_FILE_SIZE`]
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        return Err(LicenseCheckError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Symbolic links are not followed when reading input files".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;
    Ok(metadata.len())
}

/// Reads a file as UTF-8 after [`validate_regular_file`] accepted it.
pub fn read_checked(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;
    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Rejects files larger than `max_size` bytes.
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
