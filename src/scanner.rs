//! Depth-first search for stale cache directories.

use crate::classifier::{PathClassifier, Verdict};
use crate::config::CleanerConfig;
use crate::fs::FileSystem;
use crate::report::{MatchRecord, ScanReport};
use crate::size::folder_size;
use std::path::Path;
use std::time::SystemTime;

/// Counters for one scanner, across every root it walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub dirs_listed: usize,
    pub entries_checked: usize,
    pub matched: usize,
    pub skipped_invalid: usize,
    pub too_young: usize,
    pub errors: usize,
}

pub struct TreeScanner<'a, F: FileSystem> {
    fs: &'a F,
    classifier: PathClassifier<'a, F>,
    stats: ScanStats,
}

impl<'a, F: FileSystem> TreeScanner<'a, F> {
    pub fn new(config: &'a CleanerConfig, fs: &'a F) -> Self {
        Self::with_classifier(fs, PathClassifier::new(config, fs))
    }

    pub fn with_reference_time(config: &'a CleanerConfig, fs: &'a F, reference_time: SystemTime) -> Self {
        Self::with_classifier(fs, PathClassifier::with_reference_time(config, fs, reference_time))
    }

    fn with_classifier(fs: &'a F, classifier: PathClassifier<'a, F>) -> Self {
        Self {
            fs,
            classifier,
            stats: ScanStats::default(),
        }
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Walks `root` and appends every stale cache directory to `report`.
    /// Nothing here fails: problems are logged and the walk moves on.
    pub fn scan(&mut self, root: &Path, report: &mut ScanReport) {
        // Excluded roots are dropped before any filesystem call.
        if self.classifier.is_excluded(root) {
            return;
        }
        if !self.fs.exists(root) {
            tracing::warn!(root = %root.display(), "scan root does not exist");
            return;
        }

        tracing::debug!(root = %root.display(), "scanning");
        self.walk(root, report);
    }

    fn walk(&mut self, dir: &Path, report: &mut ScanReport) {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                self.stats.errors += 1;
                tracing::warn!(dir = %dir.display(), error = %e, "failed to list directory");
                return;
            }
        };
        self.stats.dirs_listed += 1;

        for path in entries {
            if self.classifier.is_excluded(&path) {
                continue;
            }

            self.stats.entries_checked += 1;
            let meta = match self.fs.symlink_metadata(&path) {
                Ok(meta) => meta,
                Err(e) => {
                    self.stats.errors += 1;
                    tracing::warn!(path = %path.display(), error = %e, "failed to stat entry");
                    continue;
                }
            };
            if !meta.is_dir() {
                continue;
            }

            let is_candidate = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| self.classifier.is_cache_candidate(name));

            if !is_candidate {
                self.walk(&path, report);
                continue;
            }

            match self.classifier.classify(&path) {
                Verdict::Deletable => {}
                Verdict::MissingManifest => {
                    self.stats.skipped_invalid += 1;
                    continue;
                }
                Verdict::TooYoung => {
                    self.stats.too_young += 1;
                    tracing::debug!(path = %path.display(), "cache directory is not old enough");
                    continue;
                }
                Verdict::Unreadable => {
                    self.stats.errors += 1;
                    continue;
                }
            }

            let modified = match meta.modified() {
                Ok(modified) => modified,
                Err(e) => {
                    self.stats.errors += 1;
                    tracing::warn!(path = %path.display(), error = %e, "failed to read modification time");
                    continue;
                }
            };
            let size_bytes = folder_size(&path);
            tracing::debug!(path = %path.display(), size_bytes, "found stale cache directory");
            self.stats.matched += 1;
            report.push(MatchRecord::new(path, size_bytes, modified));
        }
    }
}
