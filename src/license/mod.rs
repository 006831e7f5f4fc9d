//! License lookup tables and classification.
//!
//! - [`licenses`] — built-in license identifier → [`LicenseInfo`](crate::models::LicenseInfo) table.
//! - [`packages`] — built-in package name → license identifier table.
//! - [`classifier`] — [`Catalog`](classifier::Catalog), which layers configured
//!   overrides on top of both tables and builds dependency records.

pub mod classifier;
pub mod licenses;
pub mod packages;
