use crate::license_compliance::domain::{
    ImporterStep, IncludedDependencies, ResolvedDependencyRef, WalkerStep,
};
use crate::shared::Result;

/// DependencyWalker port exposing a resolved dependency graph layer by layer
///
/// Implementations must not deduplicate: a dependency path reachable from two
/// parents is returned under both. Callers expand each edge at most once and
/// are responsible for breaking cycles.
pub trait DependencyWalker: Send + Sync {
    /// Identifiers of every importer (workspace member) declared in the lockfile
    fn importer_ids(&self) -> Vec<String>;

    /// Entry steps for the given importers, filtered by `include`
    ///
    /// # Errors
    /// Returns an error if an importer is not declared in the lockfile
    fn importer_steps(
        &self,
        importer_ids: &[String],
        include: IncludedDependencies,
    ) -> Result<Vec<ImporterStep>>;

    /// The dependencies of one resolved edge
    fn next_step(
        &self,
        dependency: &ResolvedDependencyRef,
        include: IncludedDependencies,
    ) -> Result<WalkerStep>;
}
