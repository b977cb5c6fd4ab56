//! Exclusion and deletability decisions.

use crate::config::CleanerConfig;
use crate::fs::FileSystem;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Outcome of checking a cache candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Deletable,
    MissingManifest,
    TooYoung,
    Unreadable,
}

pub struct PathClassifier<'a, F: FileSystem> {
    config: &'a CleanerConfig,
    fs: &'a F,
    reference_time: SystemTime,
}

impl<'a, F: FileSystem> PathClassifier<'a, F> {
    pub fn new(config: &'a CleanerConfig, fs: &'a F) -> Self {
        Self::with_reference_time(config, fs, SystemTime::now())
    }

    /// Ages are measured against `reference_time` instead of the clock.
    pub fn with_reference_time(config: &'a CleanerConfig, fs: &'a F, reference_time: SystemTime) -> Self {
        Self {
            config,
            fs,
            reference_time,
        }
    }

    /// True if the path contains any exclusion fragment. Case-sensitive,
    /// applied to the path exactly as given.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.config
            .excluded
            .iter()
            .any(|fragment| path == fragment.as_str() || path.contains(fragment.as_str()))
    }

    pub fn is_cache_candidate(&self, name: &str) -> bool {
        name == self.config.cache_dir_name
    }

    /// A candidate may be deleted only when its parent holds the manifest
    /// and the directory itself is strictly older than the age threshold.
    /// Any uncertainty answers false.
    pub fn is_deletable(&self, candidate: &Path) -> bool {
        self.classify(candidate) == Verdict::Deletable
    }

    pub fn classify(&self, candidate: &Path) -> Verdict {
        let Some(parent) = candidate.parent() else {
            tracing::warn!(path = %candidate.display(), "cache directory has no parent, skipping");
            return Verdict::MissingManifest;
        };

        if !self.fs.exists(&parent.join(&self.config.manifest_name)) {
            tracing::warn!(
                project = %parent.display(),
                "skipping {}: no {} in {}",
                candidate.display(),
                self.config.manifest_name,
                parent.display()
            );
            return Verdict::MissingManifest;
        }

        match self.age(candidate) {
            Some(age) if age > self.config.min_age => Verdict::Deletable,
            Some(_) => Verdict::TooYoung,
            None => Verdict::Unreadable,
        }
    }

    /// Age of `path` by its own modification time. None if it cannot be read.
    pub fn age(&self, path: &Path) -> Option<Duration> {
        let modified = match self.fs.symlink_metadata(path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read modification time");
                return None;
            }
        };
        // A timestamp in the future counts as brand new.
        Some(self.reference_time.duration_since(modified).unwrap_or(Duration::ZERO))
    }
}
