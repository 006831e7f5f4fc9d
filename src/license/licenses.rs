use crate::models::{LicenseCategory, LicenseInfo, Risk};

/// Identifier assigned to packages missing from the package table.
pub const NO_LICENSE: &str = "NO-LICENSE";

const PERMISSIVE: LicenseInfo = LicenseInfo::new(LicenseCategory::Permissive, Risk::Low, true);
const STRONG_COPYLEFT: LicenseInfo = LicenseInfo::new(LicenseCategory::Copyleft, Risk::High, false);
const WEAK_COPYLEFT: LicenseInfo = LicenseInfo::new(LicenseCategory::Copyleft, Risk::Medium, false);
/// File-level copyleft (MPL, CDDL, EPL): obligations stay with the modified files.
const FILE_COPYLEFT: LicenseInfo = LicenseInfo::new(LicenseCategory::Copyleft, Risk::Medium, true);

/// Built-in metadata for a license identifier. Matching is exact.
pub fn lookup(id: &str) -> Option<LicenseInfo> {
    let info = match id {
        "MIT"
        | "ISC"
        | "BSD-2-Clause"
        | "BSD-3-Clause"
        | "BSD-4-Clause"
        | "Apache-2.0"
        | "Apache"
        | "0BSD"
        | "Unlicense"
        | "CC0-1.0"
        | "CC-BY-4.0"
        | "Public Domain"
        | "WTFPL"
        | "Zlib"
        | "BSL-1.0"
        | "Python-2.0"
        | "PHP"
        | "Ruby" => PERMISSIVE,

        "GPL-2.0" | "GPL-3.0" | "AGPL-3.0" => STRONG_COPYLEFT,

        "LGPL-2.0" | "LGPL-2.1" | "LGPL-3.0" | "CC-BY-SA-4.0" => WEAK_COPYLEFT,

        "MPL-2.0" | "CDDL-1.0" | "EPL-2.0" => FILE_COPYLEFT,

        NO_LICENSE => LicenseInfo::UNCLASSIFIED,

        _ => return None,
    };
    Some(info)
}
