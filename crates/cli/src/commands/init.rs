use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use tokio::fs::{create_dir_all, write};

use anyhow::Result;
use clap::Args;
use modkit_core::{Config, ModuleExtension, RunConfig, RunKind, TestModConfig};
use modkit_utils::get_modkit_dir;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Initialize modkit configuration")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Starting configuration written by `modkit init`
fn template_config() -> Config {
    let mut modules = BTreeMap::new();
    modules.insert(
        "example".to_string(),
        ModuleExtension {
            library: Some("core".to_string()),
            ..Default::default()
        },
    );
    let mut runs = HashMap::new();
    runs.insert(
        RunKind::Client,
        RunConfig {
            command: "./gradlew runTestmodClient".to_string(),
            working_dir: None,
        },
    );
    runs.insert(
        RunKind::Server,
        RunConfig {
            command: "./gradlew runTestmodServer".to_string(),
            working_dir: None,
        },
    );

    Config {
        version: "0.1.0".to_string(),
        organization: "org.example".to_string(),
        modules,
        publish_command: "./gradlew :{module}:publish".to_string(),
        runs,
        test_mod: Some(TestModConfig {
            descriptor: PathBuf::from("testmod/src/main/resources/testmod.json"),
        }),
        ..Default::default()
    }
}

/// Initialize modkit configuration
///
/// # Errors
/// Returns error if the project is already initialized or writing the config fails.
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let current_dir = CommandContext::current_dir()?;
    let modkit_dir = get_modkit_dir(&current_dir)?;
    let config_file = modkit_dir.join("config.json");
    if config_file.exists() {
        anyhow::bail!("modkit already initialized in {}", modkit_dir.display());
    }
    if !args.dry_run {
        create_dir_all(&modkit_dir).await?;
        write(
            &config_file,
            format!("{}\n", serde_json::to_string_pretty(&template_config())?),
        )
        .await?;
    }
    tracing::info!(path = %config_file.display(), dry_run = args.dry_run, "initialized");
    println!("modkit initialized in {}", modkit_dir.display());
    Ok(())
}
