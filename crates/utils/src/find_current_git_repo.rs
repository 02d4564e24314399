use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gix::{ThreadSafeRepository, discover};

/// Find git repository from current directory using gix
pub fn find_current_git_repo(current_dir: &Path) -> Result<ThreadSafeRepository> {
    let repo = discover(current_dir)?.into_sync();
    Ok(repo)
}

/// Working directory root of the repository containing `current_dir`
pub fn get_repo_root(current_dir: &Path) -> Result<PathBuf> {
    let repo = find_current_git_repo(current_dir)?;
    Ok(repo
        .work_dir()
        .context("Not a git working directory. Ensure you are inside a git repository.")?
        .to_path_buf())
}
