use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

pub mod node;

/// Declared dependencies of one project: package name → version specifier.
pub type DependencyMap = BTreeMap<String, String>;

/// Reads the manifest a project directory is recognised by.
pub trait ManifestParser {
    /// File name that marks a directory as a project.
    fn manifest_file(&self) -> &'static str;

    /// Parse the manifest inside `project_dir` into its merged dependencies.
    fn parse(&self, project_dir: &Path) -> Result<DependencyMap>;
}
