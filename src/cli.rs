use clap::Parser;
use pnpm_licenses::application::dto::OutputFormat;
use std::path::PathBuf;

/// Build license compliance reports for pnpm projects
#[derive(Parser, Debug)]
#[command(name = "pnpm-licenses")]
#[command(version)]
#[command(
    about = "Build license compliance reports from pnpm-lock.yaml and the installed packages",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output format: json (license report), tree (full compliance tree) or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only include production dependencies
    #[arg(short = 'P', long = "prod")]
    pub production: bool,

    /// Only include devDependencies
    #[arg(short = 'D', long)]
    pub dev: bool,

    /// Skip optionalDependencies
    #[arg(long)]
    pub no_optional: bool,

    /// Location of pnpm's virtual store, relative to the project directory
    #[arg(long, value_name = "DIR")]
    pub virtual_store_dir: Option<PathBuf>,

    /// Path to a config file (defaults to pnpm-licenses.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
