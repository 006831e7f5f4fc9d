use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Compliance bucket a license falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseCategory {
    Permissive,
    Copyleft,
    Unknown,
    /// Never produced by the built-in tables; only reachable through
    /// configured license overrides.
    Proprietary,
}

impl std::fmt::Display for LicenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseCategory::Permissive => write!(f, "permissive"),
            LicenseCategory::Copyleft => write!(f, "copyleft"),
            LicenseCategory::Unknown => write!(f, "unknown"),
            LicenseCategory::Proprietary => write!(f, "proprietary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Risk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Risk::Low => write!(f, "low"),
            Risk::Medium => write!(f, "medium"),
            Risk::High => write!(f, "high"),
        }
    }
}

/// Classification metadata attached to a license identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInfo {
    pub category: LicenseCategory,
    pub risk: Risk,
    /// Safe for unrestricted commercial use.
    pub commercial: bool,
}

impl LicenseInfo {
    pub const fn new(category: LicenseCategory, risk: Risk, commercial: bool) -> Self {
        Self {
            category,
            risk,
            commercial,
        }
    }

    /// Metadata used for any license identifier missing from the table.
    pub const UNCLASSIFIED: LicenseInfo =
        LicenseInfo::new(LicenseCategory::Unknown, Risk::High, false);
}

/// A workspace child directory that carries a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub package: String,
    pub version: String,
    pub license: String,
    pub category: LicenseCategory,
    pub risk: Risk,
    pub commercial: bool,
    /// Name of the project that declared the dependency.
    pub project: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub total_scanned: usize,
    pub permissive: usize,
    pub copyleft: usize,
    pub unknown: usize,
    pub proprietary: usize,
    pub projects: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub permissive: Vec<DependencyRecord>,
    pub copyleft: Vec<DependencyRecord>,
    pub unknown: Vec<DependencyRecord>,
    pub proprietary: Vec<DependencyRecord>,
    pub summary: ScanSummary,
}

impl ScanResult {
    /// File a record under its category and bump the matching counters.
    pub fn record(&mut self, dep: DependencyRecord) {
        self.summary.total_scanned += 1;
        match dep.category {
            LicenseCategory::Permissive => {
                self.summary.permissive += 1;
                self.permissive.push(dep);
            }
            LicenseCategory::Copyleft => {
                self.summary.copyleft += 1;
                self.copyleft.push(dep);
            }
            LicenseCategory::Proprietary => {
                self.summary.proprietary += 1;
                self.proprietary.push(dep);
            }
            LicenseCategory::Unknown => {
                self.summary.unknown += 1;
                self.unknown.push(dep);
            }
        }
    }

    /// Records in the given category.
    pub fn entries(&self, category: LicenseCategory) -> &[DependencyRecord] {
        match category {
            LicenseCategory::Permissive => &self.permissive,
            LicenseCategory::Copyleft => &self.copyleft,
            LicenseCategory::Unknown => &self.unknown,
            LicenseCategory::Proprietary => &self.proprietary,
        }
    }
}
