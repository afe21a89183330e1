use std::path::{Path, PathBuf};

/// Default location of pnpm's virtual store, relative to the project directory
pub const DEFAULT_VIRTUAL_STORE_DIR: &str = "node_modules/.pnpm";

/// Which dependency fields of an importer take part in the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncludedDependencies {
    pub dependencies: bool,
    pub dev_dependencies: bool,
    pub optional_dependencies: bool,
}

impl IncludedDependencies {
    pub fn all() -> Self {
        Self {
            dependencies: true,
            dev_dependencies: true,
            optional_dependencies: true,
        }
    }

    pub fn production_only() -> Self {
        Self {
            dependencies: true,
            dev_dependencies: false,
            optional_dependencies: true,
        }
    }

    pub fn dev_only() -> Self {
        Self {
            dependencies: false,
            dev_dependencies: true,
            optional_dependencies: false,
        }
    }

    /// Resolves the `--prod` / `--dev` flag pair the way pnpm does:
    /// one flag alone narrows the walk, both or neither include everything.
    pub fn from_flags(production: bool, dev: bool, optional: bool) -> Self {
        let base = match (production, dev) {
            (true, false) => Self::production_only(),
            (false, true) => Self::dev_only(),
            _ => Self::all(),
        };
        Self {
            optional_dependencies: base.optional_dependencies && optional,
            ..base
        }
    }
}

impl Default for IncludedDependencies {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration threaded explicitly through every license check call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseCheckOptions {
    /// Project root containing `pnpm-lock.yaml`
    pub dir: PathBuf,
    /// Virtual store location, relative to `dir` unless absolute
    pub virtual_store_dir: PathBuf,
    pub include: IncludedDependencies,
}

impl LicenseCheckOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            virtual_store_dir: PathBuf::from(DEFAULT_VIRTUAL_STORE_DIR),
            include: IncludedDependencies::default(),
        }
    }

    pub fn with_virtual_store_dir(mut self, virtual_store_dir: impl Into<PathBuf>) -> Self {
        self.virtual_store_dir = virtual_store_dir.into();
        self
    }

    pub fn with_include(mut self, include: IncludedDependencies) -> Self {
        self.include = include;
        self
    }

    /// Absolute (or `dir`-relative) root of the virtual store
    pub fn virtual_store_root(&self) -> PathBuf {
        self.dir.join(&self.virtual_store_dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
