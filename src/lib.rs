//! pnpm-licenses - license compliance reports for pnpm projects
//!
//! This library walks the dependency graph recorded in `pnpm-lock.yaml`,
//! reads every installed package's manifest from pnpm's virtual store, and
//! builds a hierarchical compliance tree plus an aggregated license report.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_compliance`): compliance tree model and pure services
//! - **Application Layer** (`application`): use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pnpm_licenses::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let use_case = CheckLicensesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     CachingLicenseAnnotator::new(ManifestLicenseAnnotator::new()),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = LicenseCheckRequest::builder()
//!     .project_path(".")
//!     .include(IncludedDependencies::production_only())
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! let output = JsonReportFormatter::new().format(&response.tree, &response.report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_compliance;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonReportFormatter, MarkdownReportFormatter, TreeJsonFormatter,
    };
    pub use crate::adapters::outbound::license::{
        CachingLicenseAnnotator, ManifestLicenseAnnotator,
    };
    pub use crate::adapters::outbound::lockfile::{PnpmLockfile, PnpmLockfileWalker};
    pub use crate::application::dto::{LicenseCheckRequest, LicenseCheckResponse, OutputFormat};
    pub use crate::application::use_cases::CheckLicensesUseCase;
    pub use crate::license_compliance::domain::{
        ComplianceNode, ComplianceReport, ComplianceTree, IncludedDependencies,
        LicenseCheckOptions, LicenseInfo,
    };
    pub use crate::license_compliance::services::{ReportAggregator, RequiresProjector};
    pub use crate::ports::outbound::{
        DependencyWalker, LicenseAnnotator, LockfileReader, ManifestReader, OutputPresenter,
        ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
