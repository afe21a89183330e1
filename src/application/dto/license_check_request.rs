use crate::license_compliance::domain::{
    IncludedDependencies, LicenseCheckOptions, DEFAULT_VIRTUAL_STORE_DIR,
};
use crate::shared::error::LicenseCheckError;
use crate::shared::Result;
use std::path::PathBuf;

/// LicenseCheckRequest - request DTO for the license check use case
#[derive(Debug, Clone)]
pub struct LicenseCheckRequest {
    /// Project directory containing pnpm-lock.yaml
    pub project_path: PathBuf,
    /// Options threaded through the walk
    pub options: LicenseCheckOptions,
}

impl LicenseCheckRequest {
    pub fn new(project_path: PathBuf, options: LicenseCheckOptions) -> Self {
        Self {
            project_path,
            options,
        }
    }

    pub fn builder() -> LicenseCheckRequestBuilder {
        LicenseCheckRequestBuilder::default()
    }
}

/// Builder for [`LicenseCheckRequest`]
#[derive(Debug, Default)]
pub struct LicenseCheckRequestBuilder {
    project_path: Option<PathBuf>,
    virtual_store_dir: Option<PathBuf>,
    include: Option<IncludedDependencies>,
}

impl LicenseCheckRequestBuilder {
    pub fn project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    pub fn virtual_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.virtual_store_dir = Some(dir.into());
        self
    }

    pub fn include(mut self, include: IncludedDependencies) -> Self {
        self.include = Some(include);
        self
    }

    /// # Errors
    /// Returns a validation error if the project path is missing or empty
    pub fn build(self) -> Result<LicenseCheckRequest> {
        let project_path = self
            .project_path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| LicenseCheckError::Validation {
                message: "project_path is required".to_string(),
            })?;

        let virtual_store_dir = self
            .virtual_store_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VIRTUAL_STORE_DIR));
        if virtual_store_dir.as_os_str().is_empty() {
            return Err(LicenseCheckError::Validation {
                message: "virtual_store_dir must not be empty".to_string(),
            }
            .into());
        }

        let options = LicenseCheckOptions::new(project_path.clone())
            .with_virtual_store_dir(virtual_store_dir)
            .with_include(self.include.unwrap_or_default());

        Ok(LicenseCheckRequest::new(project_path, options))
    }
}
