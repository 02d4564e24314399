use anyhow::Result;
use clap::Args;
use modkit_core::Config;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the effective modkit configuration")]
pub struct ConfigArgs {
    /// Print only the value of one top-level key (e.g. `repositoryUrl`)
    key: Option<String>,
}

fn select(config: &Config, key: Option<&str>) -> Result<serde_json::Value> {
    let value = serde_json::to_value(config)?;
    match key {
        None => Ok(value),
        Some(key) => value
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown config key `{key}`")),
    }
}

/// Print the configuration with defaults filled in
///
/// # Errors
/// Returns error if reading the configuration fails or the key is unknown.
pub async fn handle_config(args: &ConfigArgs) -> Result<()> {
    let ctx = CommandContext::new().await?;
    let value = select(&ctx.config, args.key.as_deref())?;
    match value {
        serde_json::Value::String(text) => println!("{text}"),
        other => println!("{}", serde_json::to_string_pretty(&other)?),
    }
    Ok(())
}
