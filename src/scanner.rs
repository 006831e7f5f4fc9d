use crate::analyzer::node::PackageJsonParser;
use crate::analyzer::{DependencyMap, ManifestParser};
use crate::config::{ScanMode, ScanOptions};
use crate::discovery::{discover_projects, resolve_workspace};
use crate::error::Result;
use crate::license::classifier::Catalog;
use crate::models::{Project, ScanResult};

/// Discovers the projects of a workspace and classifies their dependencies.
pub struct LicenseScanner {
    options: ScanOptions,
    catalog: Catalog,
    parser: PackageJsonParser,
}

impl LicenseScanner {
    /// Scanner using the built-in license tables.
    pub fn new(options: ScanOptions) -> Self {
        Self::with_catalog(options, Catalog::builtin())
    }

    pub fn with_catalog(options: ScanOptions, catalog: Catalog) -> Self {
        Self {
            options,
            catalog,
            parser: PackageJsonParser::new(),
        }
    }

    /// Run a full scan. In [`ScanMode::Lenient`] this never fails.
    pub async fn scan(&self) -> Result<ScanResult> {
        tracing::info!(
            workspace = %self.options.workspace_path.display(),
            "scanning for license compliance"
        );

        let projects = match self.options.mode {
            ScanMode::Strict => self.try_find_projects()?,
            ScanMode::Lenient => self.find_projects(),
        };
        tracing::info!("found {} projects", projects.len());

        let mut result = ScanResult::default();
        result.summary.projects = projects.len();

        for project in &projects {
            let deps = match self.options.mode {
                ScanMode::Strict => self.try_parse_dependencies(project)?,
                ScanMode::Lenient => self.parse_dependencies(project),
            };
            tracing::debug!(project = %project.name, dependencies = deps.len(), "classifying");

            for (package, version) in &deps {
                result.record(self.catalog.classify(&project.name, package, version));
            }
        }

        Ok(result)
    }

    /// Projects under the workspace root. An unreadable workspace is logged
    /// and yields no projects.
    pub fn find_projects(&self) -> Vec<Project> {
        self.try_find_projects().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "error finding projects");
            Vec::new()
        })
    }

    pub fn try_find_projects(&self) -> Result<Vec<Project>> {
        let workspace = resolve_workspace(&self.options.workspace_path);
        discover_projects(
            &workspace,
            &self.options.exclude_dirs,
            self.parser.manifest_file(),
        )
    }

    /// Merged dependencies of `project`. A missing or broken manifest yields
    /// an empty map.
    pub fn parse_dependencies(&self, project: &Project) -> DependencyMap {
        self.try_parse_dependencies(project).unwrap_or_else(|err| {
            tracing::debug!(project = %project.name, error = %err, "ignoring manifest");
            DependencyMap::new()
        })
    }

    pub fn try_parse_dependencies(&self, project: &Project) -> Result<DependencyMap> {
        self.parser.parse(&project.path)
    }
}

/// Scan `options.workspace_path` with the built-in tables.
pub async fn scan(options: ScanOptions) -> Result<ScanResult> {
    LicenseScanner::new(options).scan().await
}
