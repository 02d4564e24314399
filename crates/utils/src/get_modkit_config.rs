use std::path::Path;

use anyhow::{Context, Result};
use modkit_core::Config;

use crate::get_modkit_dir;

/// Load `.modkit/config.json` from the enclosing git repository
pub async fn get_modkit_config(current_dir: &Path) -> Result<Config> {
    let config_file = get_modkit_dir(current_dir)?.join("config.json");
    if !config_file.exists() {
        anyhow::bail!(
            "modkit config not found at {}. Run `modkit init` first.",
            config_file.display()
        );
    }
    let content = tokio::fs::read_to_string(&config_file)
        .await
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config {}", config_file.display()))?;
    tracing::debug!(path = %config_file.display(), modules = config.modules.len(), "loaded config");
    Ok(config)
}
