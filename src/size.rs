use std::path::Path;
use walkdir::WalkDir;

const MB: f64 = 1024.0 * 1024.0;

/// Total bytes under `path`. Symlinks are not followed; a link counts as a
/// file of its own size. Unreadable entries are logged and count as zero.
pub fn folder_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                let at = e.path().unwrap_or(path).display().to_string();
                tracing::warn!(path = %at, error = %e, "failed to read entry while sizing");
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .filter_map(|entry| match entry.metadata() {
            Ok(meta) => Some(meta.len()),
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "failed to stat file while sizing");
                None
            }
        })
        .sum()
}

/// Size in megabytes with two decimals, e.g. `5.00MB`.
pub fn format_size(bytes: u64) -> String {
    format!("{:.2}MB", bytes as f64 / MB)
}
