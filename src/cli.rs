use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dep_license_scanner::LicenseCategory;

#[derive(Parser, Debug)]
#[command(
    name = "dep-license-scanner",
    about = "Scan dependencies for license compliance",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan for license compliance
    Scan(ScanArgs),
}

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Workspace path
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Config file [default: <path>/.dep-license-scanner/config.toml, fallback ~/.config/dep-license-scanner/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Additional directory name to skip (repeatable)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Fail on unreadable workspaces and broken manifests instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Entries listed per category in the terminal report
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Exit with code 1 if any dependency falls in this category (repeatable)
    #[arg(long = "fail-on", value_name = "CATEGORY")]
    pub fail_on: Vec<CategoryArg>,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    Permissive,
    Copyleft,
    Unknown,
    Proprietary,
}

impl From<CategoryArg> for LicenseCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Permissive => LicenseCategory::Permissive,
            CategoryArg::Copyleft => LicenseCategory::Copyleft,
            CategoryArg::Unknown => LicenseCategory::Unknown,
            CategoryArg::Proprietary => LicenseCategory::Proprietary,
        }
    }
}
