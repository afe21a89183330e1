use super::pnpm_lockfile::{ref_to_relative, PnpmLockfile};
use crate::license_compliance::domain::{
    ImporterStep, IncludedDependencies, PackageSnapshot, ResolvedDependencyRef, WalkerStep,
};
use crate::ports::outbound::DependencyWalker;
use crate::shared::error::LicenseCheckError;
use crate::shared::Result;
use indexmap::IndexMap;

/// PnpmLockfileWalker adapter exposing a parsed `pnpm-lock.yaml` as a dependency graph
///
/// Stateless over the lockfile: every call computes its step from scratch and
/// nothing is deduplicated.
pub struct PnpmLockfileWalker {
    lockfile: PnpmLockfile,
    v6: bool,
}

impl PnpmLockfileWalker {
    pub fn new(lockfile: PnpmLockfile) -> Self {
        let v6 = lockfile.uses_v6_paths();
        Self { lockfile, v6 }
    }

    /// Turns `(name, reference)` pairs into one walker step
    fn resolve_step<'r>(
        &self,
        references: impl IntoIterator<Item = (&'r str, &'r str)>,
        include: IncludedDependencies,
    ) -> WalkerStep {
        let mut step = WalkerStep::default();
        for (name, reference) in references {
            let Some(dep_path) = ref_to_relative(reference, name, self.v6) else {
                step.links.push(reference.to_string());
                continue;
            };
            match self.lockfile.packages.get(&dep_path) {
                Some(snapshot) if Self::is_included(snapshot, include) => step
                    .dependencies
                    .push(ResolvedDependencyRef::new(dep_path, snapshot.clone())),
                Some(_) => {}
                None => step.missing.push(dep_path),
            }
        }
        step
    }

    fn is_included(snapshot: &PackageSnapshot, include: IncludedDependencies) -> bool {
        if snapshot.is_dev() && !include.dev_dependencies {
            return false;
        }
        if snapshot.is_optional() && !include.optional_dependencies {
            return false;
        }
        true
    }
}

impl DependencyWalker for PnpmLockfileWalker {
    fn importer_ids(&self) -> Vec<String> {
        self.lockfile.importer_ids()
    }

    fn importer_steps(
        &self,
        importer_ids: &[String],
        include: IncludedDependencies,
    ) -> Result<Vec<ImporterStep>> {
        importer_ids
            .iter()
            .map(|importer_id| {
                let project = self.lockfile.importer(importer_id).ok_or_else(|| {
                    LicenseCheckError::ImporterNotFound {
                        importer_id: importer_id.clone(),
                    }
                })?;

                // later fields overwrite same-name entries of earlier ones
                let mut direct: IndexMap<&str, &str> = IndexMap::new();
                let fields = [
                    (include.dev_dependencies, &project.dev_dependencies),
                    (include.dependencies, &project.dependencies),
                    (include.optional_dependencies, &project.optional_dependencies),
                ];
                for (included, field) in fields {
                    if !included {
                        continue;
                    }
                    for (name, reference) in field {
                        direct.insert(name.as_str(), reference.reference());
                    }
                }

                Ok(ImporterStep {
                    importer_id: importer_id.clone(),
                    step: self.resolve_step(direct, include),
                })
            })
            .collect()
    }

    fn next_step(
        &self,
        dependency: &ResolvedDependencyRef,
        include: IncludedDependencies,
    ) -> Result<WalkerStep> {
        let snapshot = &dependency.snapshot;
        let optional = snapshot
            .optional_dependencies
            .iter()
            .filter(|_| include.optional_dependencies);
        let references = snapshot
            .dependencies
            .iter()
            .chain(optional)
            .map(|(name, reference)| (name.as_str(), reference.as_str()));
        Ok(self.resolve_step(references, include))
    }
}
