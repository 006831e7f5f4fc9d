use std::collections::HashMap;

use crate::config::Config;
use crate::license::{licenses, packages};
use crate::models::{DependencyRecord, LicenseInfo};

/// Lookup tables used to classify dependencies.
///
/// Wraps the built-in package and license tables with optional overrides
/// from the configuration file. Overrides are consulted first; nothing is
/// mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    licenses: HashMap<String, LicenseInfo>,
    packages: HashMap<String, String>,
}

impl Catalog {
    /// The built-in tables with no overrides.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Layer the `[licenses]` and `[packages]` sections of `config` over the
    /// built-in tables. Package names are lowercased.
    pub fn from_config(config: &Config) -> Self {
        let packages = config
            .packages
            .iter()
            .map(|(name, license)| (name.to_lowercase(), license.clone()))
            .collect();

        Self {
            licenses: config.licenses.clone(),
            packages,
        }
    }

    /// License identifier for `package`, or [`licenses::NO_LICENSE`] when the
    /// package is not listed. Case-insensitive.
    pub fn resolve_license(&self, package: &str) -> String {
        let key = package.to_lowercase();
        if let Some(license) = self.packages.get(&key) {
            return license.clone();
        }
        packages::lookup(&key)
            .unwrap_or(licenses::NO_LICENSE)
            .to_string()
    }

    /// Metadata for a license identifier, falling back to
    /// [`LicenseInfo::UNCLASSIFIED`].
    pub fn license_info(&self, license: &str) -> LicenseInfo {
        self.licenses
            .get(license)
            .copied()
            .or_else(|| licenses::lookup(license))
            .unwrap_or(LicenseInfo::UNCLASSIFIED)
    }

    /// Build the record for one declared dependency.
    pub fn classify(&self, project: &str, package: &str, version: &str) -> DependencyRecord {
        let license = self.resolve_license(package);
        let info = self.license_info(&license);

        DependencyRecord {
            package: package.to_string(),
            version: version.to_string(),
            license,
            category: info.category,
            risk: info.risk,
            commercial: info.commercial,
            project: project.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LicenseCategory, Risk};

    #[test]
    fn test_unlisted_package_has_no_license() {
        let catalog = Catalog::builtin();
        let dep = catalog.classify("app", "some-unlisted-pkg", "1.0.0");
        assert_eq!(dep.license, "NO-LICENSE");
        assert_eq!(dep.category, LicenseCategory::Unknown);
        assert_eq!(dep.risk, Risk::High);
        assert!(!dep.commercial);
    }

    #[test]
    fn test_unlisted_license_falls_back() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.license_info("CUSTOM-LICENSE-42"),
            LicenseInfo::new(LicenseCategory::Unknown, Risk::High, false)
        );
    }

    #[test]
    fn test_package_lookup_ignores_case() {
        let catalog = Catalog::builtin();
        let upper = catalog.classify("app", "React", "^18.0.0");
        let lower = catalog.classify("app", "react", "^18.0.0");
        assert_eq!(upper.license, lower.license);
        assert_eq!(upper.category, lower.category);
        assert_eq!(upper.package, "React");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config: Config = toml::from_str(
            r#"
[licenses."Acme-EULA"]
category = "proprietary"
risk = "high"
commercial = false

[licenses.MIT]
category = "permissive"
risk = "medium"
commercial = true

[packages]
"@Acme/UI" = "Acme-EULA"
"#,
        )
        .unwrap();
        let catalog = Catalog::from_config(&config);

        let dep = catalog.classify("app", "@acme/ui", "2.0.0");
        assert_eq!(dep.license, "Acme-EULA");
        assert_eq!(dep.category, LicenseCategory::Proprietary);

        assert_eq!(catalog.license_info("MIT").risk, Risk::Medium);
        assert_eq!(catalog.resolve_license("lodash"), "MIT");
    }
}
