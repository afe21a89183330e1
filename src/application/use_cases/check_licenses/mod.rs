mod node_builder;
mod package_detail_resolver;
mod tree_assembler;

pub use node_builder::{Ancestors, DependencyNodeBuilder};
pub use package_detail_resolver::PackageDetailResolver;
pub use tree_assembler::{AssembledTree, TreeAssembler};

use crate::application::dto::{LicenseCheckRequest, LicenseCheckResponse};
use crate::license_compliance::services::ReportAggregator;
use crate::ports::outbound::{
    DependencyWalker, LicenseAnnotator, LockfileReader, ManifestReader, ProgressReporter,
};
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// CheckLicensesUseCase - Core use case for building the license compliance tree
///
/// Orchestrates the workflow: load the lockfile, walk every importer into a
/// compliance tree, aggregate the license report.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `MR` - ManifestReader implementation
/// * `LA` - LicenseAnnotator implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckLicensesUseCase<LR, MR, LA, PR> {
    lockfile_reader: LR,
    manifest_reader: MR,
    license_annotator: LA,
    progress_reporter: PR,
}

impl<LR, MR, LA, PR> CheckLicensesUseCase<LR, MR, LA, PR>
where
    LR: LockfileReader,
    MR: ManifestReader,
    LA: LicenseAnnotator,
    PR: ProgressReporter,
{
    /// Creates a new CheckLicensesUseCase with injected dependencies
    pub fn new(
        lockfile_reader: LR,
        manifest_reader: MR,
        license_annotator: LA,
        progress_reporter: PR,
    ) -> Self {
        Self {
            lockfile_reader,
            manifest_reader,
            license_annotator,
            progress_reporter,
        }
    }

    /// Executes the license check
    ///
    /// # Errors
    /// Fails when the lockfile cannot be loaded or the walk itself fails.
    /// Problems with individual packages only produce warnings.
    pub async fn execute(&self, request: LicenseCheckRequest) -> Result<LicenseCheckResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading pnpm-lock.yaml from: {}",
            request.project_path.display()
        ));
        let walker = self.lockfile_reader.read_lockfile(&request.project_path)?;

        let importer_count = walker.importer_ids().len();
        self.progress_reporter
            .report(&format!("✅ Detected {} importer(s)", importer_count));
        self.progress_reporter
            .report("🔍 Resolving license information...");

        let assembled = self.assemble_with_progress(&walker, &request).await?;

        for warning in &assembled.warnings {
            self.progress_reporter.report_error(warning);
        }

        let report = ReportAggregator::aggregate(&assembled.tree);
        self.progress_reporter.report_completion(&format!(
            "✅ License check complete: {} package(s), {} distinct license(s)",
            report.metadata.total_dependencies,
            report.licenses.len()
        ));

        Ok(LicenseCheckResponse::new(
            assembled.tree,
            report,
            assembled.warnings,
        ))
    }

    /// Builds the tree while a spinner thread polls the processed-node counter
    async fn assemble_with_progress(
        &self,
        walker: &LR::Walker,
        request: &LicenseCheckRequest,
    ) -> Result<AssembledTree> {
        let processed = Arc::new(AtomicUsize::new(0));
        let is_done = Arc::new(AtomicBool::new(false));

        let processed_clone = processed.clone();
        let done_clone = is_done.clone();

        let progress_handle = thread::spawn(move || {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("   {spinner:.green} {pos} package(s) - {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message("Reading package manifests...");

            while !done_clone.load(Ordering::Relaxed) {
                pb.set_position(processed_clone.load(Ordering::Relaxed) as u64);
                pb.tick();
                thread::sleep(Duration::from_millis(50));
            }

            pb.finish_and_clear();
        });

        let result = TreeAssembler::assemble(
            walker,
            &self.manifest_reader,
            &self.license_annotator,
            &request.options,
            processed.clone(),
        )
        .await;

        is_done.store(true, Ordering::Relaxed);
        let _ = progress_handle.join();

        let total = processed.load(Ordering::Relaxed);
        self.progress_reporter.report_progress(total, Some(total), None);

        result
    }
}

#[cfg(test)]
mod tests;
