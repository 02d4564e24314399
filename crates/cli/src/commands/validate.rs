use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::{context::CommandContext, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Validate module configuration")]
pub struct ValidateArgs {
    #[arg(long, default_value = "stdout")]
    format: FormatOptions,
}

/// Validate every module and list the resolved artifacts
///
/// # Errors
/// Returns error if any module fails validation.
pub async fn handle_validate(args: &ValidateArgs) -> Result<()> {
    let ctx = CommandContext::new().await?;
    let modules = ctx.modules(None)?;

    match args.format {
        FormatOptions::Stdout => {
            println!("Found {} modules", modules.len());
            for module in &modules {
                println!(
                    "  {} {}:{}:{}",
                    module.name().bold(),
                    module.group(),
                    module.archive_base_name(),
                    module.version()
                );
            }
        }
        FormatOptions::Json => {
            let entries = modules
                .iter()
                .map(|module| {
                    (
                        module.name().to_string(),
                        json!({
                            "group": module.group(),
                            "archiveBaseName": module.archive_base_name(),
                            "version": module.version(),
                            "directory": module.directory(),
                        }),
                    )
                })
                .collect::<serde_json::Map<_, _>>();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}
