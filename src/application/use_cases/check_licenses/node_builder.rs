use super::package_detail_resolver::PackageDetailResolver;
use crate::license_compliance::domain::{
    ComplianceNode, DependencyMap, IncludedDependencies, LicenseInfo, PackageDetails,
    ResolvedDependencyRef, WalkerStep,
};
use crate::ports::outbound::{DependencyWalker, LicenseAnnotator, ManifestReader};
use crate::shared::Result;
use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Dependency paths currently being expanded on the recursion stack
pub type Ancestors = HashSet<String>;

/// DependencyNodeBuilder turns walker steps into compliance nodes
///
/// Siblings are built concurrently; each recursive call owns its output map
/// and results are inserted in declaration order. A dependency path already on
/// the active recursion stack is emitted as a leaf instead of being expanded,
/// which keeps the output finite on cyclic graphs. Paths reached through
/// different non-cyclic routes are expanded again for every occurrence.
pub struct DependencyNodeBuilder<'a, W, MR, LA> {
    walker: &'a W,
    resolver: PackageDetailResolver<'a, MR>,
    annotator: &'a LA,
    include: IncludedDependencies,
    processed: Arc<AtomicUsize>,
    warnings: Mutex<Vec<String>>,
}

impl<'a, W, MR, LA> DependencyNodeBuilder<'a, W, MR, LA>
where
    W: DependencyWalker,
    MR: ManifestReader,
    LA: LicenseAnnotator,
{
    pub fn new(
        walker: &'a W,
        resolver: PackageDetailResolver<'a, MR>,
        annotator: &'a LA,
        include: IncludedDependencies,
        processed: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            walker,
            resolver,
            annotator,
            include,
            processed,
            warnings: Mutex::new(Vec::new()),
        }
    }

    /// Builds the child map of one walker step.
    ///
    /// # Errors
    /// Only walker failures are returned; per-package problems degrade that
    /// package's license info and are collected as warnings.
    pub fn build<'s>(
        &'s self,
        step: WalkerStep,
        ancestors: &'s Ancestors,
    ) -> BoxFuture<'s, Result<DependencyMap>> {
        async move {
            for dep_path in &step.missing {
                self.warn(format!(
                    "⚠️  Warning: {} is referenced but missing from the lockfile packages",
                    dep_path
                ));
            }

            let built = join_all(
                step.dependencies
                    .into_iter()
                    .map(|dependency| self.build_node(dependency, ancestors)),
            )
            .await;

            let mut dependencies = DependencyMap::new();
            for result in built {
                let (name, node) = result?;
                // duplicate names at one level: the later edge wins
                dependencies.insert(name, node);
            }
            Ok(dependencies)
        }
        .boxed()
    }

    async fn build_node(
        &self,
        dependency: ResolvedDependencyRef,
        ancestors: &Ancestors,
    ) -> Result<(String, ComplianceNode)> {
        let details = self.resolver.resolve(&dependency).await;
        if details.manifest.is_none() {
            self.warn(format!(
                "⚠️  Warning: No usable package.json for {}@{} at {}",
                details.name,
                details.version,
                details.install_path.display()
            ));
        }

        let subdeps = if ancestors.contains(&dependency.dep_path) {
            DependencyMap::new()
        } else {
            let child_step = self.walker.next_step(&dependency, self.include)?;
            let mut child_ancestors = ancestors.clone();
            child_ancestors.insert(dependency.dep_path.clone());
            self.build(child_step, &child_ancestors).await?
        };

        let license_info = self.annotate(&details).await;
        self.processed.fetch_add(1, Ordering::Relaxed);

        let snapshot = &dependency.snapshot;
        let node = ComplianceNode::new(
            details.version,
            snapshot.integrity().map(str::to_string),
            license_info,
            snapshot.is_dev(),
            snapshot.is_optional(),
        )
        .with_dependencies(subdeps);

        Ok((details.name, node))
    }

    /// Packages without a manifest are never annotated: their license is unknown
    async fn annotate(&self, details: &PackageDetails) -> LicenseInfo {
        let Some(manifest) = details.manifest.as_ref() else {
            return LicenseInfo::unknown();
        };
        match self.annotator.annotate(manifest, &details.install_path).await {
            Ok(info) => info,
            Err(e) => {
                self.warn(format!(
                    "⚠️  Warning: Failed to determine the license of {}@{}: {}",
                    details.name, details.version, e
                ));
                LicenseInfo::unknown()
            }
        }
    }

    fn warn(&self, message: String) {
        self.warnings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message);
    }

    /// Warnings collected so far, sorted
    ///
    /// Siblings are polled concurrently, so the order they were raised in
    /// varies between runs.
    pub fn into_warnings(self) -> Vec<String> {
        let mut warnings = self
            .warnings
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        warnings.sort();
        warnings
    }
}
