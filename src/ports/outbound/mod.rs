/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the lockfile, the installed packages, and the console.
pub mod dependency_walker;
pub mod license_annotator;
pub mod lockfile_reader;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use dependency_walker::DependencyWalker;
pub use license_annotator::LicenseAnnotator;
pub use lockfile_reader::LockfileReader;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
