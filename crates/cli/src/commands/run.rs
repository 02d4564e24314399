use anyhow::{Context, Result};
use clap::Args;
use modkit_core::{RunKind, run_interactive, validate_test_mod_file};
use tokio::fs::create_dir_all;

use crate::{
    commands::verify_test_mod::configured_descriptor, context::CommandContext,
    options::CliRunKind,
};

#[derive(Args, Debug)]
#[command(about = "Launch the test mod in a client or server harness")]
pub struct RunArgs {
    kind: CliRunKind,
}

/// Run a test harness configuration
///
/// # Errors
/// Returns error if the run is not configured, the test mod is invalid, or the command fails.
pub async fn handle_run(args: &RunArgs) -> Result<()> {
    let ctx = CommandContext::new().await?;
    let kind = RunKind::from(args.kind);
    let run = ctx.config.run(kind)?;

    if ctx.config.test_mod.is_some() {
        validate_test_mod_file(&configured_descriptor(&ctx)?).await?;
    }

    let working_dir = match &run.working_dir {
        Some(dir) => ctx.repo_root_path.join(dir),
        None => ctx.repo_root_path.clone(),
    };
    create_dir_all(&working_dir)
        .await
        .with_context(|| format!("Failed to create {}", working_dir.display()))?;

    tracing::info!(%kind, command = %run.command, "starting run configuration");
    run_interactive(&run.command, &working_dir).await
}
