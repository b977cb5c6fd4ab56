use crate::report::MatchRecord;
use std::fs;
use std::io;

pub struct CleanResult {
    pub deleted: Vec<MatchRecord>,
    pub failed: Vec<(MatchRecord, io::Error)>,
}

impl CleanResult {
    pub fn total_cleaned(&self) -> u64 {
        self.deleted.iter().map(MatchRecord::size_bytes).sum()
    }
}

/// Removes each directory in order. A failure is logged and recorded, and
/// the remaining removals still run.
pub fn clean(records: Vec<MatchRecord>) -> CleanResult {
    let mut deleted = Vec::new();
    let mut failed = Vec::new();

    for record in records {
        match fs::remove_dir_all(record.path()) {
            Ok(()) => {
                tracing::info!(path = %record.path().display(), size_bytes = record.size_bytes(), "deleted");
                deleted.push(record);
            }
            Err(e) => {
                tracing::error!(path = %record.path().display(), error = %e, "failed to delete");
                failed.push((record, e));
            }
        }
    }

    CleanResult { deleted, failed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;
    use tempfile::tempdir;

    #[test]
    fn one_failure_does_not_stop_the_rest() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a/.next");
        let third = dir.path().join("c/.next");
        fs::create_dir_all(first.join("cache")).unwrap();
        fs::create_dir_all(&third).unwrap();
        fs::write(first.join("cache/blob"), vec![0u8; 64]).unwrap();

        let now = SystemTime::now();
        let records = vec![
            MatchRecord::new(first.clone(), 64, now),
            MatchRecord::new(dir.path().join("b/.next"), 10, now),
            MatchRecord::new(third.clone(), 5, now),
        ];

        let (result, logs) = crate::logging::capture(|| clean(records));

        assert_eq!(result.deleted.len(), 2);
        assert_eq!(result.failed.len(), 1);
        assert_eq!(result.total_cleaned(), 69);
        assert!(!first.exists());
        assert!(!third.exists());
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("failed to delete"));
    }
}
