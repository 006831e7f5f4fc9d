//! `dep-license-scanner` — command-line front end.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config (`config::load_config`) and build the lookup catalog.
//! 3. Scan the workspace (`LicenseScanner::scan`).
//! 4. Render the requested report.
//! 5. Exit with a code per outcome (see `ExitCode`).

mod cli;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Cli, Command, ReportFormat, ScanArgs};
use dep_license_scanner::config::load_config;
use dep_license_scanner::discovery::resolve_workspace;
use dep_license_scanner::{
    report, Catalog, ExitCode, LicenseCategory, LicenseScanner, ScanError, ScanOptions,
};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here and print to stdout
            let code = if err.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = err.print();
            std::process::exit(code.as_i32());
        }
    };

    // Logs go to stderr so JSON reports on stdout stay parseable
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let code = match cli.command {
        Command::Scan(args) => match scan_command(args).await {
            Ok(code) => code,
            Err(err) => {
                eprintln!("{} {}", "Error:".red().bold(), err);
                for cause in err.chain().skip(1) {
                    eprintln!("  Caused by: {}", cause);
                }
                err.downcast_ref::<ScanError>()
                    .map(ExitCode::from)
                    .unwrap_or(ExitCode::InternalError)
            }
        },
    };

    std::process::exit(code.as_i32());
}

async fn scan_command(args: ScanArgs) -> Result<ExitCode> {
    let workspace = resolve_workspace(&args.path);

    let config = load_config(&workspace, args.config.as_deref())?;
    let options = ScanOptions::from_config(&workspace, &config)
        .exclude(args.exclude.iter().cloned())
        .strict(args.strict);
    let scanner = LicenseScanner::with_catalog(options, Catalog::from_config(&config));

    let show_spinner = !args.quiet && matches!(args.report, ReportFormat::Terminal);
    let spinner = show_spinner.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Scanning for license compliance...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = match scanner.scan().await {
        Ok(result) => result,
        Err(err) => {
            if let Some(pb) = &spinner {
                pb.abandon_with_message("Scan failed!");
            }
            return Err(err.into());
        }
    };

    if let Some(pb) = spinner {
        pb.finish_with_message("Scan complete!");
    }

    match args.report {
        ReportFormat::Terminal => {
            report::terminal::render(&result, &workspace, args.limit, args.quiet);
        }
        ReportFormat::Json => {
            report::json::render(&result, &mut std::io::stdout().lock())?;
        }
    }

    let violations: Vec<LicenseCategory> = args
        .fail_on
        .iter()
        .map(|&c| LicenseCategory::from(c))
        .filter(|&c| !result.entries(c).is_empty())
        .collect();

    if violations.is_empty() {
        return Ok(ExitCode::Success);
    }

    for category in &violations {
        eprintln!(
            "{} {} {} dependencies found",
            "✗".red(),
            result.entries(*category).len(),
            category
        );
    }
    Ok(ExitCode::ComplianceViolation)
}
