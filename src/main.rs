mod cli;

use clap::Parser;
use cli::Args;
use owo_colors::OwoColorize;
use pnpm_licenses::adapters::outbound::console::StderrProgressReporter;
use pnpm_licenses::adapters::outbound::filesystem::FileSystemReader;
use pnpm_licenses::adapters::outbound::license::{
    CachingLicenseAnnotator, ManifestLicenseAnnotator,
};
use pnpm_licenses::application::dto::{LicenseCheckRequest, OutputFormat};
use pnpm_licenses::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pnpm_licenses::application::use_cases::CheckLicensesUseCase;
use pnpm_licenses::config::{self, ConfigFile};
use pnpm_licenses::license_compliance::domain::{
    IncludedDependencies, DEFAULT_VIRTUAL_STORE_DIR,
};
use pnpm_licenses::shared::error::{ExitCode, LicenseCheckError};
use pnpm_licenses::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                // --help / --version
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\n{} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Effective settings after merging the config file under the CLI flags
#[derive(Debug, PartialEq)]
struct Settings {
    format: OutputFormat,
    virtual_store_dir: PathBuf,
    include: IncludedDependencies,
}

async fn run(args: Args) -> Result<()> {
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&project_path)?,
    };
    let settings = merge_settings(&args, config.unwrap_or_default())?;

    let use_case = CheckLicensesUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        CachingLicenseAnnotator::new(ManifestLicenseAnnotator::new()),
        StderrProgressReporter::new(),
    );

    let request = LicenseCheckRequest::builder()
        .project_path(project_path)
        .virtual_store_dir(settings.virtual_store_dir)
        .include(settings.include)
        .build()?;

    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.tree, &response.report)?;

    PresenterFactory::create(PresenterType::from_output(args.output))
        .present(&formatted_output)?;

    Ok(())
}

/// CLI flags win over config values; config values win over defaults
fn merge_settings(args: &Args, config: ConfigFile) -> Result<Settings> {
    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(format)) => format
            .parse::<OutputFormat>()
            .map_err(|e: String| anyhow::anyhow!(e))?,
        (None, None) => OutputFormat::default(),
    };

    let virtual_store_dir = args
        .virtual_store_dir
        .clone()
        .or_else(|| config.virtual_store_dir.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_VIRTUAL_STORE_DIR));

    // the --prod/--dev pair is one setting: any CLI flag replaces the config pair
    let (production, dev) = if args.production || args.dev {
        (args.production, args.dev)
    } else {
        (
            config.production.unwrap_or(false),
            config.dev.unwrap_or(false),
        )
    };
    let optional = !args.no_optional && config.optional.unwrap_or(true);

    Ok(Settings {
        format,
        virtual_store_dir,
        include: IncludedDependencies::from_flags(production, dev, optional),
    })
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LicenseCheckError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| LicenseCheckError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(LicenseCheckError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(LicenseCheckError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
