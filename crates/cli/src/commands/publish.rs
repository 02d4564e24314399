use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use modkit_core::{
    ModuleDescriptor, PublishResult, generate_manifest, resolve_publish_command, run_command,
};
use modkit_maven::attach_publish_metadata_to_file;
use modkit_utils::current_commit_hash;

use crate::{
    commands::check::{check_all, into_decisions},
    context::CommandContext,
    options::FormatOptions,
};

#[derive(Args, Debug)]
#[command(about = "Publish modules that changed since their last release")]
pub struct PublishArgs {
    /// Module to publish (all modules when omitted)
    module: Option<String>,

    #[arg(short, long)]
    dry_run: bool,

    #[arg(short, long)]
    yes: bool,

    /// POM to stamp with the commit hash before publishing, relative to the repository root.
    /// `{module}` and `{version}` are replaced per module. Only useful when the publish
    /// command does not regenerate the POM; otherwise read `MODKIT_COMMIT_HASH` in the build.
    #[arg(long)]
    pom: Option<String>,

    #[arg(long, default_value = "stdout")]
    format: FormatOptions,
}

fn pom_path(template: &str, module: &ModuleDescriptor) -> String {
    template
        .replace("{module}", module.name())
        .replace("{version}", module.version())
}

/// Generate the manifest, stamp the POM and run the publish command for one module
async fn publish_module(
    ctx: &CommandContext,
    module: &ModuleDescriptor,
    current_hash: &str,
    pom: Option<&str>,
) -> Result<()> {
    generate_manifest(module, &ctx.generated_dir(module)).await?;
    if let Some(template) = pom {
        attach_publish_metadata_to_file(
            &ctx.repo_root_path.join(pom_path(template, module)),
            current_hash,
        )
        .await?;
    }
    let command = resolve_publish_command(module, &ctx.config);
    run_command(
        &command,
        &ctx.repo_root_path,
        &[
            ("MODKIT_COMMIT_HASH", current_hash),
            ("MODKIT_MODULE", module.name()),
            ("MODKIT_VERSION", module.version()),
        ],
    )
    .await
}

/// Publish modules whose published POM does not record the current commit
///
/// # Errors
/// Returns error if configuration is invalid, a remote lookup fails, or any publish fails.
pub async fn handle_publish(args: &PublishArgs) -> Result<()> {
    let ctx = CommandContext::new().await?;
    let modules = ctx.modules(args.module.as_deref())?;
    let current_hash = current_commit_hash(&ctx.repo_root_path)?;
    let checks = check_all(&ctx, &modules, &current_hash).await?;
    let decisions = into_decisions(&modules, checks)?;

    let mut result_map = BTreeMap::new();
    let mut pending = Vec::new();
    for (module, decision) in modules.iter().zip(decisions) {
        if decision.should_publish() {
            pending.push((module, decision));
        } else {
            args.format.note(&format!(
                "Skipping {} (unchanged since {})",
                module.name(),
                current_hash
            ));
            result_map.insert(
                module.name().to_string(),
                PublishResult::new(module.version().to_string(), decision, false, None),
            );
        }
    }

    if pending.is_empty() {
        return args.format.report("Nothing to publish", &result_map);
    }

    if let FormatOptions::Stdout = args.format {
        println!("Modules to publish:");
        for (module, decision) in &pending {
            println!("  {} {}: {}", module.name().bold(), module.version(), decision);
        }
    }

    if args.dry_run {
        return args
            .format
            .report("Dry run, no modules will be published", &result_map);
    }

    // confirm
    let confirm = if args.yes {
        true
    } else {
        inquire::Confirm::new("Are you sure you want to publish the modules?").prompt()?
    };
    if !confirm {
        return args.format.report("Publish cancelled", &result_map);
    }

    let mut failed = 0;
    let total = pending.len();
    for (module, decision) in pending {
        args.format.note(&format!("Publishing {}...", module.name()));
        let result = publish_module(&ctx, module, &current_hash, args.pom.as_deref()).await;
        let error = match result {
            Ok(()) => {
                args.format.note(&format!("Successfully published {}", module.name()));
                None
            }
            Err(e) => {
                failed += 1;
                tracing::error!(module = module.name(), error = %e, "publish failed");
                if let FormatOptions::Stdout = args.format {
                    eprintln!("Failed to publish {}: {}", module.name(), e);
                }
                Some(e.to_string())
            }
        };
        result_map.insert(
            module.name().to_string(),
            PublishResult::new(
                module.version().to_string(),
                decision,
                error.is_none(),
                error,
            ),
        );
    }

    args.format.report(
        &format!("Published {} module(s), {failed} failed", total - failed),
        &result_map,
    )?;
    if failed > 0 {
        anyhow::bail!("{failed} module(s) failed to publish");
    }
    Ok(())
}
