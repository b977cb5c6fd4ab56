//! Filesystem access used by the scanner.
//!
//! The scanner only needs three operations, so they sit behind a small trait.
//! `RealFs` forwards to `std::fs`; tests wrap it to observe which paths get
//! touched.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// Immediate children of `path`, sorted by file name.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Metadata for `path` without following a trailing symlink.
    fn symlink_metadata(&self, path: &Path) -> io::Result<Metadata>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(path)? {
            match entry {
                Ok(entry) => children.push(entry.path()),
                Err(e) => {
                    tracing::warn!(dir = %path.display(), error = %e, "failed to read directory entry");
                }
            }
        }
        children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(children)
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<Metadata> {
        fs::symlink_metadata(path)
    }
}
