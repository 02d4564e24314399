use std::path::Path;

use anyhow::{Context, Result};

use crate::find_current_git_repo;

/// Full hex id of the commit `HEAD` points at
pub fn current_commit_hash(current_dir: &Path) -> Result<String> {
    let repo = find_current_git_repo(current_dir)?.to_thread_local();
    let head = repo
        .head_id()
        .context("Failed to resolve HEAD. Ensure the repository has at least one commit.")?;
    Ok(head.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(path: &Path, args: &[&str]) -> String {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(path)
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    fn init_repo(path: &Path) {
        git(path, &["init", "-b", "main"]);
        git(path, &["config", "user.email", "test@test.com"]);
        git(path, &["config", "user.name", "Test"]);
    }

    #[test]
    fn test_current_commit_hash_matches_git() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path();
        init_repo(temp_path);
        std::fs::write(temp_path.join("README.md"), "events").unwrap();
        git(temp_path, &["add", "."]);
        git(temp_path, &["commit", "-m", "Initial commit"]);

        let hash = current_commit_hash(temp_path).unwrap();
        assert_eq!(hash, git(temp_path, &["rev-parse", "HEAD"]));
        assert_eq!(hash.len(), 40);
    }

    #[test]
    fn test_current_commit_hash_changes_with_commits() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path();
        init_repo(temp_path);
        std::fs::write(temp_path.join("a.txt"), "a").unwrap();
        git(temp_path, &["add", "."]);
        git(temp_path, &["commit", "-m", "first"]);
        let first = current_commit_hash(temp_path).unwrap();

        std::fs::write(temp_path.join("b.txt"), "b").unwrap();
        git(temp_path, &["add", "."]);
        git(temp_path, &["commit", "-m", "second"]);
        let second = current_commit_hash(temp_path).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_current_commit_hash_without_commits() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());
        assert!(current_commit_hash(temp_dir.path()).is_err());
    }
}
