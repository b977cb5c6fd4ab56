//! Default scan roots: the invoking user's home plus the other user homes.
//!
//! The result is only logged. Actual scan roots come from the command line.

use std::fs;
use std::path::{Path, PathBuf};

const RESERVED_USER_DIR: &str = "Shared";

#[cfg(target_os = "macos")]
const USERS_DIR: Option<&str> = Some("/Users");
#[cfg(all(unix, not(target_os = "macos")))]
const USERS_DIR: Option<&str> = Some("/home");
#[cfg(not(unix))]
const USERS_DIR: Option<&str> = None;

pub fn default_roots() -> Vec<PathBuf> {
    enumerate_roots(dirs::home_dir(), USERS_DIR.map(Path::new))
}

/// Home first, then each visible subdirectory of `users_dir` in name order,
/// leaving out the reserved shared directory and the home itself.
pub fn enumerate_roots(home: Option<PathBuf>, users_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = home.into_iter().collect();

    let Some(users_dir) = users_dir else {
        return roots;
    };

    let entries = match fs::read_dir(users_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %users_dir.display(), error = %e, "failed to list user directories");
            return roots;
        }
    };

    let mut others: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| name != RESERVED_USER_DIR && !name.starts_with('.'))
        })
        .map(|e| e.path())
        .filter(|p| !roots.contains(p))
        .collect();
    others.sort();

    roots.extend(others);
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_home_then_other_users() {
        let users = tempdir().unwrap();
        for name in ["zoe", "alice", "Shared", ".localized", "bob"] {
            fs::create_dir(users.path().join(name)).unwrap();
        }
        fs::write(users.path().join("notes.txt"), "not a user").unwrap();
        let home = users.path().join("bob");

        let roots = enumerate_roots(Some(home.clone()), Some(users.path()));

        assert_eq!(
            roots,
            vec![home, users.path().join("alice"), users.path().join("zoe")]
        );
    }

    #[test]
    fn without_users_dir_only_home() {
        let roots = enumerate_roots(Some(PathBuf::from("/home/me")), None);
        assert_eq!(roots, vec![PathBuf::from("/home/me")]);
    }

    #[test]
    fn unreadable_users_dir_falls_back_to_home() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let (roots, logs) =
            crate::logging::capture(|| enumerate_roots(Some(PathBuf::from("/home/me")), Some(&missing)));

        assert_eq!(roots, vec![PathBuf::from("/home/me")]);
        assert!(logs.contains("failed to list user directories"));
    }
}
