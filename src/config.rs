use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ScanError};
use crate::models::LicenseInfo;

/// Directory names skipped during discovery unless configured otherwise.
pub const DEFAULT_EXCLUDE_DIRS: [&str; 3] = ["node_modules", ".git", "dist"];

const CONFIG_DIR: &str = ".dep-license-scanner";
const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure, deserialized from `.dep-license-scanner/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    /// License metadata overrides keyed by license identifier.
    #[serde(default)]
    pub licenses: HashMap<String, LicenseInfo>,
    /// Package → license identifier overrides. Keys are lowercased on load.
    #[serde(default)]
    pub packages: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScanConfig {
    /// Replaces [`DEFAULT_EXCLUDE_DIRS`] when set.
    pub exclude_dirs: Option<Vec<String>>,
    /// Propagate discovery and manifest errors instead of reporting zeros.
    #[serde(default)]
    pub strict: bool,
}

/// How a scan treats unreadable directories and broken manifests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Log and continue with an empty result for the failing step.
    #[default]
    Lenient,
    /// Abort the scan with the first error.
    Strict,
}

/// Options for a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Workspace root whose immediate children are scanned.
    pub workspace_path: PathBuf,
    /// Child directory names that are never treated as projects.
    pub exclude_dirs: BTreeSet<String>,
    pub mode: ScanMode,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            workspace_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            exclude_dirs: default_exclude_dirs(),
            mode: ScanMode::Lenient,
        }
    }
}

impl ScanOptions {
    pub fn new(workspace_path: impl Into<PathBuf>) -> Self {
        Self {
            workspace_path: workspace_path.into(),
            ..Self::default()
        }
    }

    /// Options for `workspace_path` with the `[scan]` section of `config` applied.
    pub fn from_config(workspace_path: impl Into<PathBuf>, config: &Config) -> Self {
        let exclude_dirs = match &config.scan.exclude_dirs {
            Some(dirs) => dirs.iter().cloned().collect(),
            None => default_exclude_dirs(),
        };
        let mode = if config.scan.strict {
            ScanMode::Strict
        } else {
            ScanMode::Lenient
        };

        Self {
            workspace_path: workspace_path.into(),
            exclude_dirs,
            mode,
        }
    }

    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        if strict {
            self.mode = ScanMode::Strict;
        }
        self
    }
}

fn default_exclude_dirs() -> BTreeSet<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect()
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<workspace_path>/.dep-license-scanner/config.toml`
/// 3. `~/.config/dep-license-scanner/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(workspace_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let workspace_config = workspace_path.join(CONFIG_DIR).join(CONFIG_FILE);
    if workspace_config.exists() {
        return read_config(&workspace_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("dep-license-scanner")
            .join(CONFIG_FILE);
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    tracing::debug!("no configuration file found, using built-in defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "loading configuration");
    let content = std::fs::read_to_string(path).map_err(|e| ScanError::Config {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| ScanError::Config {
        path: path.to_path_buf(),
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LicenseCategory, Risk};
    use tempfile::TempDir;

    #[test]
    fn test_default_options() {
        let opts = ScanOptions::new("/work");
        assert_eq!(opts.workspace_path, PathBuf::from("/work"));
        assert!(opts.exclude_dirs.contains("node_modules"));
        assert!(opts.exclude_dirs.contains(".git"));
        assert!(opts.exclude_dirs.contains("dist"));
        assert_eq!(opts.mode, ScanMode::Lenient);
    }

    #[test]
    fn test_options_from_config_replace_excludes() {
        let config: Config = toml::from_str(
            r#"
[scan]
exclude_dirs = ["vendor"]
strict = true
"#,
        )
        .unwrap();
        let opts = ScanOptions::from_config("/work", &config).exclude(["build"]);
        let expected: BTreeSet<String> = ["build", "vendor"].iter().map(|s| s.to_string()).collect();
        assert_eq!(opts.exclude_dirs, expected);
        assert_eq!(opts.mode, ScanMode::Strict);
    }

    #[test]
    fn test_load_workspace_config() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(CONFIG_DIR)).unwrap();
        std::fs::write(
            dir.path().join(CONFIG_DIR).join(CONFIG_FILE),
            r#"
[licenses."Acme-EULA"]
category = "proprietary"
risk = "high"
commercial = false
"#,
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        let info = config.licenses["Acme-EULA"];
        assert_eq!(info.category, LicenseCategory::Proprietary);
        assert_eq!(info.risk, Risk::High);
        assert!(!config.scan.strict);
    }

    #[test]
    fn test_override_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, ScanError::Config { .. }));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[licenses.MIT]\ncategory = \"bogus\"\n").unwrap();
        let err = load_config(dir.path(), Some(&path)).unwrap_err();
        assert!(matches!(err, ScanError::Config { .. }));
    }
}
