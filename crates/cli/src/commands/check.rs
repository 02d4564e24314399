use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use modkit_core::{ModuleDescriptor, PublishCheck, PublishDecision, PublishOutcome, PublishState};
use modkit_maven::{Coordinates, HttpPomFetcher, PomFetcher, check_publish};
use modkit_utils::current_commit_hash;
use serde::Serialize;

use crate::{context::CommandContext, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Check whether modules need publishing")]
pub struct CheckArgs {
    /// Module to check (all modules when omitted)
    module: Option<String>,

    #[arg(long, default_value = "stdout")]
    format: FormatOptions,
}

/// Run the publish check of `module` against `current_hash`.
///
/// The lookup is blocking and runs off the async runtime.
pub(crate) async fn check_module(
    fetcher: Arc<dyn PomFetcher>,
    repository_url: &str,
    module: &ModuleDescriptor,
    current_hash: &str,
) -> Result<PublishCheck> {
    let repository_url = repository_url.to_string();
    let coordinates = Coordinates::from(module);
    let current_hash = current_hash.to_string();
    tokio::task::spawn_blocking(move || {
        check_publish(fetcher.as_ref(), &repository_url, &coordinates, &current_hash)
    })
    .await
    .context("Publish check did not complete")
}

/// Check every module. A failed lookup does not stop the remaining checks.
pub(crate) async fn check_all(
    ctx: &CommandContext,
    modules: &[ModuleDescriptor],
    current_hash: &str,
) -> Result<Vec<PublishCheck>> {
    let fetcher: Arc<dyn PomFetcher> = Arc::new(HttpPomFetcher);
    let mut checks = Vec::with_capacity(modules.len());
    for module in modules {
        checks.push(
            check_module(
                fetcher.clone(),
                &ctx.config.repository_url,
                module,
                current_hash,
            )
            .await?,
        );
    }
    Ok(checks)
}

/// Decisions of finished checks, or an error naming every module whose lookup failed
pub(crate) fn into_decisions(
    modules: &[ModuleDescriptor],
    checks: Vec<PublishCheck>,
) -> Result<Vec<PublishDecision>> {
    let mut decisions = Vec::with_capacity(checks.len());
    let mut failures = Vec::new();
    for (module, check) in modules.iter().zip(checks) {
        match check.into_decision() {
            Ok(decision) => decisions.push(decision),
            Err(e) => failures.push(format!("{}: {e}", module.name())),
        }
    }
    if !failures.is_empty() {
        anyhow::bail!(
            "Failed to check published state of {}",
            failures.join(", ")
        );
    }
    Ok(decisions)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    state: PublishState,
    outcome: Option<PublishOutcome>,
    #[serde(flatten)]
    decision: Option<PublishDecision>,
    error: Option<String>,
}

impl CheckReport {
    fn new(check: &PublishCheck) -> Self {
        Self {
            state: check.state(),
            outcome: check.state().outcome(),
            decision: check.clone().into_decision().ok(),
            error: check.error().map(ToString::to_string),
        }
    }
}

/// Print the publish state of each module
///
/// # Errors
/// Returns error if configuration is invalid or any remote lookup fails.
pub async fn handle_check(args: &CheckArgs) -> Result<()> {
    let ctx = CommandContext::new().await?;
    let modules = ctx.modules(args.module.as_deref())?;
    let current_hash = current_commit_hash(&ctx.repo_root_path)?;
    let checks = check_all(&ctx, &modules, &current_hash).await?;

    match args.format {
        FormatOptions::Stdout => {
            println!("Commit {}", current_hash.dimmed());
            for (module, check) in modules.iter().zip(&checks) {
                println!("  {} {}: {}", module.name().bold(), module.version(), check);
            }
        }
        FormatOptions::Json => {
            let result_map = modules
                .iter()
                .zip(&checks)
                .map(|(module, check)| (module.name(), CheckReport::new(check)))
                .collect::<BTreeMap<_, _>>();
            println!("{}", serde_json::to_string_pretty(&result_map)?);
        }
    }

    let failed = checks
        .iter()
        .filter(|check| check.state().outcome() == Some(PublishOutcome::Fail))
        .count();
    if failed > 0 {
        anyhow::bail!("{failed} module(s) could not be checked");
    }
    Ok(())
}
