use super::PackageSnapshot;

/// One edge of the resolved dependency graph
///
/// The same dependency path may be reached again from another parent; each
/// occurrence is a separate `ResolvedDependencyRef`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDependencyRef {
    pub dep_path: String,
    pub snapshot: PackageSnapshot,
}

impl ResolvedDependencyRef {
    pub fn new(dep_path: impl Into<String>, snapshot: PackageSnapshot) -> Self {
        Self {
            dep_path: dep_path.into(),
            snapshot,
        }
    }
}

/// One layer of a lockfile walk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkerStep {
    /// Edges to resolved packages, in lockfile order
    pub dependencies: Vec<ResolvedDependencyRef>,
    /// `link:` references to other workspace members
    pub links: Vec<String>,
    /// Dependency paths referenced but absent from the `packages` section
    pub missing: Vec<String>,
}

impl WalkerStep {
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// Walker entry point for one workspace member
#[derive(Debug, Clone, PartialEq)]
pub struct ImporterStep {
    pub importer_id: String,
    pub step: WalkerStep,
}
