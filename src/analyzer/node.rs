use std::path::Path;

use serde_json::Value;

use crate::analyzer::{DependencyMap, ManifestParser};
use crate::error::{Result, ScanError};

pub const PACKAGE_JSON: &str = "package.json";

/// Sections merged in order; later sections overwrite earlier ones on key collision.
const SECTIONS: [&str; 2] = ["dependencies", "devDependencies"];

pub struct PackageJsonParser;

impl PackageJsonParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PackageJsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for PackageJsonParser {
    fn manifest_file(&self) -> &'static str {
        PACKAGE_JSON
    }

    fn parse(&self, project_dir: &Path) -> Result<DependencyMap> {
        let path = project_dir.join(PACKAGE_JSON);
        let content = std::fs::read_to_string(&path).map_err(|source| ScanError::ManifestRead {
            path: path.clone(),
            source,
        })?;
        let json: Value = serde_json::from_str(&content)
            .map_err(|source| ScanError::ManifestParse { path, source })?;

        Ok(merge_sections(&json))
    }
}

/// Merge `dependencies` and `devDependencies` into one map.
///
/// A package declared in both keeps its `devDependencies` version. Non-string
/// version values are recorded as `*`.
fn merge_sections(json: &Value) -> DependencyMap {
    let mut deps = DependencyMap::new();

    for section in SECTIONS {
        if let Some(pkgs) = json.get(section).and_then(|v| v.as_object()) {
            for (name, version) in pkgs {
                let version = version.as_str().unwrap_or("*").to_string();
                deps.insert(name.clone(), version);
            }
        }
    }

    deps
}
