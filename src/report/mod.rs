//! Report renderers for scan results.
//!
//! - [`terminal`] — colored summary box plus tables of the entries needing review;
//!   respects `--quiet` and `--limit`.
//! - [`json`] — the full [`ScanResult`](crate::models::ScanResult) as pretty JSON.

pub mod json;
pub mod terminal;
