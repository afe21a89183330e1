use pnpm_licenses::prelude::*;
use std::path::Path;

/// Mock LockfileReader serving an in-memory pnpm-lock.yaml
pub struct MockLockfileReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockLockfileReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl LockfileReader for MockLockfileReader {
    type Walker = PnpmLockfileWalker;

    fn read_lockfile(&self, _project_path: &Path) -> Result<PnpmLockfileWalker> {
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        let lockfile = PnpmLockfile::from_yaml(&self.content)?;
        Ok(PnpmLockfileWalker::new(lockfile))
    }
}
