//! Discovery of Python files under a scan root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::parser::PythonParser;
use crate::policy::Policy;

/// Collect Python files under `root` in file-name order.
///
/// A root that is itself a file is returned as-is. Entries matching the
/// policy's `excluded-paths` (relative to `root`) are skipped, directories
/// included. Unreadable entries are logged and skipped.
pub fn collect_files(root: &Path, policy: &Policy) -> anyhow::Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root)
        .map_err(|e| anyhow::anyhow!("cannot access path {}: {}", root.display(), e))?;
    if metadata.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let rel = e.path().strip_prefix(root).unwrap_or(e.path());
            if rel.as_os_str().is_empty() {
                return true;
            }
            let excluded = policy.is_path_excluded(rel);
            if excluded {
                tracing::debug!(path = %e.path().display(), "excluded");
            }
            !excluded
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && PythonParser::handles(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
