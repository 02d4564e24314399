use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use modkit_core::{ConfigurationError, validate_test_mod_file};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Check that the test mod descriptor always loads")]
pub struct VerifyTestModArgs {
    /// Descriptor to check (defaults to `testMod.descriptor` from config)
    path: Option<PathBuf>,
}

/// Resolve the descriptor path from config
pub(crate) fn configured_descriptor(ctx: &CommandContext) -> Result<PathBuf> {
    let test_mod = ctx
        .config
        .test_mod
        .as_ref()
        .ok_or(ConfigurationError::MissingTestMod)?;
    Ok(ctx.repo_root_path.join(&test_mod.descriptor))
}

/// Validate the test mod descriptor
///
/// # Errors
/// Returns error if the descriptor is missing or not marked to always load.
pub async fn handle_verify_test_mod(args: &VerifyTestModArgs) -> Result<()> {
    let path = match &args.path {
        Some(path) => CommandContext::current_dir()?.join(path),
        None => configured_descriptor(&CommandContext::new().await?)?,
    };
    validate_test_mod_file(&path).await?;
    println!("{} {}", "ok".green().bold(), path.display());
    Ok(())
}
