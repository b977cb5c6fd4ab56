use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::{TempDir, tempdir};

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// A workspace with one stale project (`old`), one fresh project (`fresh`)
/// and one stale cache without a manifest (`orphan`).
fn setup_workspace() -> TempDir {
    let dir = tempdir().unwrap();

    for (name, manifest, age) in [("old", true, 30 * DAY), ("fresh", true, DAY), ("orphan", false, 30 * DAY)] {
        let proj = dir.path().join("code").join(name);
        fs::create_dir_all(proj.join(".next/cache")).unwrap();
        fs::write(proj.join(".next/cache/chunk"), vec![0u8; 1_048_576]).unwrap();
        if manifest {
            fs::write(proj.join("package.json"), "{}").unwrap();
        }
        File::open(proj.join(".next"))
            .unwrap()
            .set_modified(SystemTime::now() - age)
            .unwrap();
    }

    dir
}

fn nextclean(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nextclean").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--log-file")
        .arg(dir.join("nextclean.log"))
        .arg(dir.join("code"));
    cmd
}

#[test]
fn dry_run_lists_only_stale_valid_caches() {
    let dir = setup_workspace();

    nextclean(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("old/.next"))
        .stdout(predicate::str::contains("1.00MB"))
        .stdout(predicate::str::contains("fresh/.next").not())
        .stdout(predicate::str::contains("orphan/.next").not())
        .stdout(predicate::str::contains("Dry run"));

    assert!(dir.path().join("code/old/.next").exists());
}

#[test]
fn yes_deletes_without_prompt() {
    let dir = setup_workspace();

    nextclean(dir.path())
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"));

    assert!(!dir.path().join("code/old/.next").exists());
    assert!(dir.path().join("code/fresh/.next").exists());
    assert!(dir.path().join("code/orphan/.next").exists());

    let log = fs::read_to_string(dir.path().join("nextclean.log")).unwrap();
    assert!(log.contains("deleted"));
}

#[test]
fn prompt_without_terminal_deletes_nothing() {
    let dir = setup_workspace();

    nextclean(dir.path())
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert!(dir.path().join("code/old/.next").exists());
}

#[test]
fn days_option_changes_threshold() {
    let dir = setup_workspace();

    nextclean(dir.path())
        .args(["--dry-run", "--days", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stale .next directories found."));
}

#[test]
fn exclude_option_prunes_paths() {
    let dir = setup_workspace();

    nextclean(dir.path())
        .args(["--dry-run", "--exclude", "/old"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stale .next directories found."));
}

#[test]
fn log_records_skips_and_missing_roots() {
    let dir = setup_workspace();
    let missing = dir.path().join("nowhere");

    nextclean(dir.path())
        .arg(&missing)
        .arg("--dry-run")
        .assert()
        .success();

    let log = fs::read_to_string(dir.path().join("nextclean.log")).unwrap();
    assert!(log.contains("WARN"));
    assert!(log.contains(&dir.path().join("code/orphan").display().to_string()));
    assert!(log.contains("scan root does not exist"));
    assert!(log.contains(&missing.display().to_string()));
}

#[test]
fn log_file_is_appended_across_runs() {
    let dir = setup_workspace();

    nextclean(dir.path()).arg("--dry-run").assert().success();
    let first = fs::read_to_string(dir.path().join("nextclean.log")).unwrap();
    nextclean(dir.path()).arg("--dry-run").assert().success();
    let second = fs::read_to_string(dir.path().join("nextclean.log")).unwrap();

    assert!(second.starts_with(&first));
    assert!(second.len() > first.len());
}
