use crate::error::CleanError;
use std::path::PathBuf;
use std::time::Duration;

/// Name of the Next.js build cache directory.
pub const CACHE_DIR_NAME: &str = ".next";

/// File that marks a genuine project root next to a cache directory.
pub const MANIFEST_FILE_NAME: &str = "package.json";

pub const DEFAULT_MIN_AGE_DAYS: u64 = 14;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Path fragments that are never traversed. Matching is by substring.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "node_modules",
    "/.git",
    "/.Trash",
    "/.cache",
    "/Library",
    "/proc/",
    "/sys/",
];

const DEFAULT_LOG_FILE: &str = ".nextclean.log";

/// Immutable settings for one run, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    pub min_age: Duration,
    pub excluded: Vec<String>,
    pub cache_dir_name: String,
    pub manifest_name: String,
    pub log_file: PathBuf,
}

impl CleanerConfig {
    /// Builds a config from the CLI-facing options. Extra exclusions are
    /// appended after the defaults, keeping their order.
    pub fn new(
        min_age_days: u64,
        extra_exclusions: &[String],
        log_file: Option<PathBuf>,
    ) -> Result<Self, CleanError> {
        let secs = min_age_days
            .checked_mul(SECS_PER_DAY)
            .ok_or(CleanError::InvalidAge(min_age_days))?;

        let mut excluded: Vec<String> = DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect();
        for fragment in extra_exclusions {
            if !fragment.is_empty() && !excluded.contains(fragment) {
                excluded.push(fragment.clone());
            }
        }

        Ok(Self {
            min_age: Duration::from_secs(secs),
            excluded,
            cache_dir_name: CACHE_DIR_NAME.to_string(),
            manifest_name: MANIFEST_FILE_NAME.to_string(),
            log_file: log_file.unwrap_or_else(default_log_file),
        })
    }

    pub fn min_age_days(&self) -> u64 {
        self.min_age.as_secs() / SECS_PER_DAY
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            min_age: Duration::from_secs(DEFAULT_MIN_AGE_DAYS * SECS_PER_DAY),
            excluded: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            cache_dir_name: CACHE_DIR_NAME.to_string(),
            manifest_name: MANIFEST_FILE_NAME.to_string(),
            log_file: default_log_file(),
        }
    }
}

fn default_log_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_LOG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_fourteen_days() {
        let config = CleanerConfig::default();
        assert_eq!(config.min_age_days(), 14);
        assert_eq!(config.cache_dir_name, ".next");
        assert_eq!(config.manifest_name, "package.json");
    }

    #[test]
    fn extra_exclusions_keep_order_and_skip_duplicates() {
        let extra = vec![
            "vendor".to_string(),
            "node_modules".to_string(),
            String::new(),
            "archive".to_string(),
        ];
        let config = CleanerConfig::new(3, &extra, Some(PathBuf::from("x.log"))).unwrap();

        let tail: Vec<&str> = config.excluded[DEFAULT_EXCLUSIONS.len()..]
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(tail, vec!["vendor", "archive"]);
        assert_eq!(config.min_age, Duration::from_secs(3 * SECS_PER_DAY));
        assert_eq!(config.log_file, PathBuf::from("x.log"));
    }

    #[test]
    fn overflowing_age_is_rejected() {
        let err = CleanerConfig::new(u64::MAX, &[], None).unwrap_err();
        assert!(matches!(err, CleanError::InvalidAge(u64::MAX)));
    }
}
