use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Workspace lockfile with two importers, a dev-only subtree, an optional
/// package and an A<->B cycle
pub const WORKSPACE_LOCKFILE: &str = r#"lockfileVersion: '6.0'

importers:
  .:
    devDependencies:
      jest:
        specifier: ^29.0.0
        version: 29.0.0

  packages/web:
    dependencies:
      react:
        specifier: ^18.2.0
        version: 18.2.0
      cycle-a:
        specifier: ^1.0.0
        version: 1.0.0
      shared:
        specifier: workspace:*
        version: link:../shared
    optionalDependencies:
      fsevents:
        specifier: ^2.3.3
        version: 2.3.3

  packages/shared:
    dependencies:
      '@scope/utils':
        specifier: ^2.0.0
        version: 2.0.0(react@18.2.0)

packages:

  /jest@29.0.0:
    resolution: {integrity: sha512-jest}
    dependencies:
      mystery: 0.1.0
    dev: true

  /mystery@0.1.0:
    resolution: {integrity: sha512-mystery}
    dev: true

  /react@18.2.0:
    resolution: {integrity: sha512-react}
    dependencies:
      loose-envify: 1.4.0
    dev: false

  /loose-envify@1.4.0:
    resolution: {integrity: sha512-le}
    dev: false

  /cycle-a@1.0.0:
    resolution: {integrity: sha512-ca}
    dependencies:
      cycle-b: 1.0.0
    dev: false

  /cycle-b@1.0.0:
    resolution: {integrity: sha512-cb}
    dependencies:
      cycle-a: 1.0.0
    dev: false

  /fsevents@2.3.3:
    resolution: {integrity: sha512-fse}
    optional: true

  /@scope/utils@2.0.0(react@18.2.0):
    resolution: {integrity: sha512-utils}
    dependencies:
      react: 18.2.0
    dev: false
"#;

/// `(virtual store directory, package name, package.json)` for every package above;
/// `mystery` ships no manifest
pub const INSTALLED_PACKAGES: &[(&str, &str, &str)] = &[
    ("jest@29.0.0", "jest", r#"{"name":"jest","version":"29.0.0","license":"MIT"}"#),
    ("react@18.2.0", "react", r#"{"name":"react","version":"18.2.0","license":"MIT"}"#),
    (
        "loose-envify@1.4.0",
        "loose-envify",
        r#"{"name":"loose-envify","version":"1.4.0","license":"MIT"}"#,
    ),
    ("cycle-a@1.0.0", "cycle-a", r#"{"name":"cycle-a","version":"1.0.0","license":"ISC"}"#),
    ("cycle-b@1.0.0", "cycle-b", r#"{"name":"cycle-b","version":"1.0.0","license":"ISC"}"#),
    (
        "fsevents@2.3.3",
        "fsevents",
        r#"{"name":"fsevents","version":"2.3.3","license":"MIT"}"#,
    ),
    (
        "@scope+utils@2.0.0_react@18.2.0",
        "@scope/utils",
        r#"{"name":"@scope/utils","version":"2.0.0","licenses":[{"type":"MIT"},{"type":"Apache-2.0"}]}"#,
    ),
];

/// A pnpm workspace laid out on disk the way `pnpm install` leaves it
pub struct SampleProject {
    pub dir: TempDir,
}

impl SampleProject {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pnpm-lock.yaml"), WORKSPACE_LOCKFILE).unwrap();
        for (store_dir, name, manifest) in INSTALLED_PACKAGES {
            write_manifest(dir.path(), store_dir, name, manifest);
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_buf(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

/// Writes `<project>/node_modules/.pnpm/<store_dir>/node_modules/<name>/package.json`
pub fn write_manifest(project: &Path, store_dir: &str, name: &str, manifest: &str) {
    let package_dir = project
        .join("node_modules/.pnpm")
        .join(store_dir)
        .join("node_modules")
        .join(name);
    fs::create_dir_all(&package_dir).unwrap();
    fs::write(package_dir.join("package.json"), manifest).unwrap();
}
