use crate::size::format_size;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A stale cache directory that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    path: PathBuf,
    size_bytes: u64,
    modified: SystemTime,
}

impl MatchRecord {
    pub fn new(path: PathBuf, size_bytes: u64, modified: SystemTime) -> Self {
        Self {
            path,
            size_bytes,
            modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    pub fn size_human(&self) -> String {
        format_size(self.size_bytes)
    }

    pub fn modified_human(&self) -> String {
        DateTime::<Local>::from(self.modified)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

/// Matches from one run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    records: Vec<MatchRecord>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MatchRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.records.iter().map(MatchRecord::size_bytes).sum()
    }

    pub fn into_records(self) -> Vec<MatchRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ScanReport {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
