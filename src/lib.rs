//! nextclean - find and remove stale Next.js `.next` build caches.
//!
//! A scan walks each root depth-first. Excluded subtrees are pruned by
//! substring match, and every `.next` directory is checked for a sibling
//! `package.json` and an age above the threshold. Matches are measured and
//! collected into a [`ScanReport`] in discovery order. Per-entry I/O failures
//! are logged through `tracing` and never abort the walk.

pub mod classifier;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod report;
pub mod roots;
pub mod scanner;
pub mod size;

pub use classifier::{PathClassifier, Verdict};
pub use cleaner::{clean, CleanResult};
pub use config::CleanerConfig;
pub use error::CleanError;
pub use fs::{FileSystem, RealFs};
pub use report::{MatchRecord, ScanReport};
pub use roots::default_roots;
pub use scanner::{ScanStats, TreeScanner};
pub use size::{folder_size, format_size};
