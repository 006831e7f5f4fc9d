use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};
use crate::models::Project;

/// Names starting with this character are hidden and never scanned.
const HIDDEN_MARKER: char = '.';

/// Resolve `path` to an absolute path, canonicalising when it exists.
pub fn resolve_workspace(path: &Path) -> PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// List the immediate children of `workspace` that contain `manifest_file`.
///
/// Skips non-directories, names in `exclude_dirs` and hidden names. Entries
/// that cannot be read, or whose type cannot be determined, are skipped. The result is sorted by name.
pub fn discover_projects(
    workspace: &Path,
    exclude_dirs: &BTreeSet<String>,
    manifest_file: &str,
) -> Result<Vec<Project>> {
    let entries = std::fs::read_dir(workspace).map_err(|source| ScanError::Discovery {
        path: workspace.to_path_buf(),
        source,
    })?;

    let mut projects = Vec::new();

    for entry in readable_entries(entries) {
        let path = entry.path();

        // Follows symlinks, so a linked project directory still counts.
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if exclude_dirs.contains(&name) || name.starts_with(HIDDEN_MARKER) {
            tracing::trace!(%name, "skipping excluded directory");
            continue;
        }

        if path.join(manifest_file).is_file() {
            projects.push(Project { name, path });
        }
    }

    projects.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(projects)
}

/// Drop directory entries that fail to read, keeping the rest of the listing.
fn readable_entries<T, I>(entries: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = std::io::Result<T>>,
{
    entries.into_iter().filter_map(|entry| match entry {
        Ok(entry) => Some(entry),
        Err(err) => {
            tracing::debug!(error = %err, "skipping unreadable directory entry");
            None
        }
    })
}
