use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::get_repo_root;

/// `.modkit` directory at the root of the enclosing git repository
pub fn get_modkit_dir(current_dir: &Path) -> Result<PathBuf> {
    Ok(get_repo_root(current_dir)?.join(".modkit"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn git_init(path: &Path) {
        std::process::Command::new("git")
            .arg("init")
            .current_dir(path)
            .output()
            .unwrap();
    }

    #[test]
    fn test_get_modkit_dir_success() {
        let temp_dir = TempDir::new().unwrap();
        git_init(temp_dir.path());

        let modkit_dir = get_modkit_dir(temp_dir.path()).unwrap();
        assert!(modkit_dir.ends_with(".modkit"));

        temp_dir.close().unwrap();
    }

    #[test]
    fn test_get_modkit_dir_without_git_repo() {
        let temp_dir = TempDir::new().unwrap();
        assert!(get_modkit_dir(temp_dir.path()).is_err());
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_get_modkit_dir_nested_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path();
        git_init(temp_path);

        let nested_dir = temp_path.join("src").join("subdir");
        fs::create_dir_all(&nested_dir).unwrap();

        let modkit_dir = get_modkit_dir(&nested_dir).unwrap();

        // Still at the git root, not in the subdirectory
        assert_eq!(
            modkit_dir.parent().unwrap().canonicalize().unwrap(),
            temp_path.canonicalize().unwrap()
        );

        temp_dir.close().unwrap();
    }
}
