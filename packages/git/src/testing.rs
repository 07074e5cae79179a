//! Throwaway repositories for tests, built with the git command line.

use std::path::Path;
use std::process::Command;

use git2::Repository;
use tempfile::TempDir;

/// Run git in `dir`, returning whether it succeeded.
pub fn try_git(dir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
        .status
        .success()
}

/// Run git in `dir`, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Identity and signing settings so commits work on any machine.
pub fn configure(dir: &Path) {
    git(dir, &["config", "user.email", "test@test.com"]);
    git(dir, &["config", "user.name", "Test"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// Write `contents` to `file` and commit everything.
pub fn commit(dir: &Path, file: &str, contents: &str) {
    std::fs::write(dir.join(file), contents).unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", file]);
}

/// A repository on an unborn `main` branch with no commits.
pub fn init_empty_repo() -> (TempDir, Repository) {
    let dir = TempDir::new().unwrap();

    git(dir.path(), &["init"]);
    git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
    configure(dir.path());

    let repo = Repository::open(dir.path()).unwrap();
    (dir, repo)
}

/// A repository on `main` with one committed file, `README.md`.
pub fn init_repo() -> (TempDir, Repository) {
    let (dir, repo) = init_empty_repo();
    commit(dir.path(), "README.md", "# Test");
    (dir, repo)
}
