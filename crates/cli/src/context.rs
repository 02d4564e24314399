use anyhow::Result;
use modkit_core::{Config, ModuleDescriptor};
use modkit_utils::{get_modkit_config, get_repo_root};
use std::path::PathBuf;

pub struct CommandContext {
    pub repo_root_path: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// # Errors
    /// Returns error if finding the git repository or loading the configuration fails.
    pub async fn new() -> Result<Self> {
        let current_dir = Self::current_dir()?;
        let repo_root_path = get_repo_root(&current_dir)?;
        let config = get_modkit_config(&current_dir).await?;

        Ok(Self {
            repo_root_path,
            config,
        })
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }

    /// The named module, or every module when `name` is `None`
    ///
    /// # Errors
    /// Returns error if a module is unknown or fails validation.
    pub fn modules(&self, name: Option<&str>) -> Result<Vec<ModuleDescriptor>> {
        Ok(match name {
            Some(name) => vec![self.config.module(name)?],
            None => self.config.resolve_modules()?,
        })
    }

    /// Generated resources directory of a module
    #[must_use]
    pub fn generated_dir(&self, module: &ModuleDescriptor) -> PathBuf {
        self.repo_root_path
            .join(module.directory())
            .join(&self.config.generated_dir)
    }
}
