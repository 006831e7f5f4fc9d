//! `dep-license-scanner` — find the sub-projects of a workspace and classify
//! the licenses of their declared dependencies.
//!
//! # Flow
//! 1. Discover child directories carrying a `package.json` ([`discovery`]).
//! 2. Merge each manifest's `dependencies` and `devDependencies` ([`analyzer`]).
//! 3. Resolve package → license → category through static tables, optionally
//!    overridden by configuration ([`license`], [`config`]).
//! 4. Collect the records into a [`ScanResult`] ([`scanner`]).
//!
//! ```no_run
//! # async fn run() -> dep_license_scanner::error::Result<()> {
//! use dep_license_scanner::{scan, ScanOptions};
//!
//! let result = scan(ScanOptions::new("./workspace")).await?;
//! println!("{} dependencies scanned", result.summary.total_scanned);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod config;
pub mod discovery;
pub mod error;
pub mod license;
pub mod models;
pub mod report;
pub mod scanner;

pub use config::{ScanMode, ScanOptions};
pub use error::{ExitCode, ScanError};
pub use license::classifier::Catalog;
pub use models::{DependencyRecord, LicenseCategory, LicenseInfo, Project, Risk, ScanResult};
pub use scanner::{scan, LicenseScanner};
