use super::*;
use crate::license_compliance::domain::{
    ImporterStep, IncludedDependencies, LicenseInfo, PackageManifest, PackageSnapshot,
    ResolvedDependencyRef, WalkerStep,
};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::path::Path;

// Mock implementations for testing

/// Importer edges are `(name, dep_path, is_dev)`; packages map dep_path to snapshot
#[derive(Clone, Default)]
struct MockWalker {
    importers: IndexMap<String, Vec<(String, String, bool)>>,
    packages: IndexMap<String, PackageSnapshot>,
}

impl MockWalker {
    fn importer(mut self, id: &str, edges: &[(&str, &str, bool)]) -> Self {
        self.importers.insert(
            id.to_string(),
            edges
                .iter()
                .map(|(n, p, d)| (n.to_string(), p.to_string(), *d))
                .collect(),
        );
        self
    }

    fn package(mut self, dep_path: &str, children: &[(&str, &str)], dev: bool) -> Self {
        self.packages.insert(
            dep_path.to_string(),
            PackageSnapshot {
                dependencies: children
                    .iter()
                    .map(|(n, p)| (n.to_string(), p.to_string()))
                    .collect(),
                dev: Some(dev),
                ..Default::default()
            },
        );
        self
    }

    fn resolve(&self, dep_paths: impl Iterator<Item = String>) -> WalkerStep {
        let mut step = WalkerStep::default();
        for dep_path in dep_paths {
            match self.packages.get(&dep_path) {
                Some(snapshot) => step
                    .dependencies
                    .push(ResolvedDependencyRef::new(dep_path, snapshot.clone())),
                None => step.missing.push(dep_path),
            }
        }
        step
    }
}

impl DependencyWalker for MockWalker {
    fn importer_ids(&self) -> Vec<String> {
        self.importers.keys().cloned().collect()
    }

    fn importer_steps(
        &self,
        importer_ids: &[String],
        include: IncludedDependencies,
    ) -> Result<Vec<ImporterStep>> {
        importer_ids
            .iter()
            .map(|id| {
                let edges = self
                    .importers
                    .get(id)
                    .ok_or_else(|| anyhow::anyhow!("unknown importer {}", id))?;
                let dep_paths = edges
                    .iter()
                    .filter(|(_, _, dev)| {
                        if *dev {
                            include.dev_dependencies
                        } else {
                            include.dependencies
                        }
                    })
                    .map(|(_, p, _)| p.clone());
                Ok(ImporterStep {
                    importer_id: id.clone(),
                    step: self.resolve(dep_paths),
                })
            })
            .collect()
    }

    fn next_step(
        &self,
        dependency: &ResolvedDependencyRef,
        _include: IncludedDependencies,
    ) -> Result<WalkerStep> {
        Ok(self.resolve(dependency.snapshot.dependencies.values().cloned()))
    }
}

struct MockLockfileReader {
    walker: Option<MockWalker>,
}

impl LockfileReader for MockLockfileReader {
    type Walker = MockWalker;

    fn read_lockfile(&self, _project_path: &Path) -> Result<MockWalker> {
        self.walker
            .clone()
            .ok_or_else(|| anyhow::anyhow!("pnpm-lock.yaml not found"))
    }
}

/// Manifest name is the last path component; `gpl-*` packages are GPL
struct MockManifestReader;

#[async_trait]
impl ManifestReader for MockManifestReader {
    async fn read_manifest(&self, package_dir: &Path) -> Option<PackageManifest> {
        let name = package_dir.file_name()?.to_string_lossy().into_owned();
        let license = if name.starts_with("gpl-") {
            "GPL-3.0"
        } else {
            "MIT"
        };
        Some(PackageManifest {
            name: Some(name),
            license: Some(crate::license_compliance::domain::LicenseField::Expression(
                license.to_string(),
            )),
            ..Default::default()
        })
    }
}

struct MockLicenseAnnotator;

#[async_trait]
impl LicenseAnnotator for MockLicenseAnnotator {
    async fn annotate(
        &self,
        manifest: &PackageManifest,
        _install_path: &Path,
    ) -> Result<LicenseInfo> {
        Ok(manifest
            .license
            .as_ref()
            .and_then(|l| l.as_expression())
            .map(LicenseInfo::declared)
            .unwrap_or_else(LicenseInfo::unknown))
    }
}

#[derive(Default)]
struct MockProgressReporter {
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: Option<usize>, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
    fn report_completion(&self, _message: &str) {}
}

fn sample_walker() -> MockWalker {
    MockWalker::default()
        .importer(
            ".",
            &[
                ("jest", "/jest@29.0.0", true),
                ("debug", "/debug@4.3.4", false),
            ],
        )
        .package("/jest@29.0.0", &[("gpl-helper", "/gpl-helper@1.0.0")], true)
        .package("/gpl-helper@1.0.0", &[], true)
        .package("/debug@4.3.4", &[("ms", "/ms@2.1.2")], false)
        .package("/ms@2.1.2", &[], false)
}

fn use_case(
    walker: Option<MockWalker>,
) -> CheckLicensesUseCase<MockLockfileReader, MockManifestReader, MockLicenseAnnotator, MockProgressReporter>
{
    CheckLicensesUseCase::new(
        MockLockfileReader { walker },
        MockManifestReader,
        MockLicenseAnnotator,
        MockProgressReporter::default(),
    )
}

fn request(include: IncludedDependencies) -> LicenseCheckRequest {
    LicenseCheckRequest::builder()
        .project_path("/project")
        .include(include)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_execute_builds_tree_and_report() {
    let use_case = use_case(Some(sample_walker()));

    let response = use_case
        .execute(request(IncludedDependencies::all()))
        .await
        .unwrap();

    let root = &response.tree.importers()["."];
    let names: Vec<&str> = root.dependencies().keys().map(String::as_str).collect();
    assert_eq!(names, vec!["jest", "debug"]);
    assert_eq!(
        root.dependencies()["debug"].dependencies()["ms"].license_info,
        LicenseInfo::declared("MIT")
    );

    assert_eq!(response.report.metadata.total_dependencies, 4);
    assert_eq!(response.report.metadata.dev_dependencies, 2);
    assert_eq!(response.report.metadata.dependencies, 2);
    assert_eq!(response.report.licenses["MIT"].name, "jest");
    assert_eq!(response.report.licenses["GPL-3.0"].name, "gpl-helper");
    assert!(response.warnings.is_empty());
}

#[tokio::test]
async fn test_execute_production_only_excludes_dev_subtree() {
    let use_case = use_case(Some(sample_walker()));

    let response = use_case
        .execute(request(IncludedDependencies::production_only()))
        .await
        .unwrap();

    let root = &response.tree.importers()["."];
    assert!(!root.dependencies().contains_key("jest"));
    assert_eq!(response.report.metadata.dev_dependencies, 0);
    assert!(!response.report.licenses.contains_key("GPL-3.0"));
}

#[tokio::test]
async fn test_execute_reports_missing_snapshot_as_warning() {
    let walker = MockWalker::default()
        .importer(".", &[("ghost", "/ghost@1.0.0", false)])
        .package("/unrelated@1.0.0", &[], false);
    let use_case = use_case(Some(walker));

    let response = use_case
        .execute(request(IncludedDependencies::all()))
        .await
        .unwrap();

    assert!(response.tree.importers()["."].dependencies().is_empty());
    assert_eq!(response.warnings.len(), 1);
    let errors = use_case.progress_reporter.errors.borrow();
    assert!(errors[0].contains("/ghost@1.0.0"));
}

#[tokio::test]
async fn test_execute_fails_when_lockfile_missing() {
    let use_case = use_case(None);

    let err = use_case
        .execute(request(IncludedDependencies::all()))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("pnpm-lock.yaml not found"));
}

#[tokio::test]
async fn test_execute_empty_lockfile_yields_empty_tree() {
    let use_case = use_case(Some(MockWalker::default()));

    let response = use_case
        .execute(request(IncludedDependencies::all()))
        .await
        .unwrap();

    assert!(response.tree.importers().is_empty());
    assert_eq!(response.report.metadata.total_dependencies, 0);
}
