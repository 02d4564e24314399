use anyhow::Result;

use clap::{Parser, Subcommand};
use modkit_utils::{get_modkit_config, init_logging};

use crate::commands::{
    CheckArgs, ConfigArgs, InitArgs, ManifestArgs, PublishArgs, RunArgs, ValidateArgs,
    VerifyTestModArgs, handle_check, handle_config, handle_init, handle_manifest, handle_publish,
    handle_run, handle_validate, handle_verify_test_mod,
};
pub mod commands;
mod context;
pub mod options;

pub use context::CommandContext;

#[derive(Parser, Debug)]
#[command(
    name = "modkit",
    author,
    version,
    about = "Module manifests, publish gating and test runs for multi-module mod projects",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter (overrides `logFilter` from config; `RUST_LOG` overrides both)
    #[arg(long, global = true)]
    log_filter: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init(InitArgs),
    Validate(ValidateArgs),
    Manifest(ManifestArgs),
    Check(CheckArgs),
    Publish(PublishArgs),
    VerifyTestMod(VerifyTestModArgs),
    Run(RunArgs),
    Config(ConfigArgs),
}

async fn configured_log_filter() -> Option<String> {
    let current_dir = CommandContext::current_dir().ok()?;
    get_modkit_config(&current_dir).await.ok()?.log_filter
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    let log_filter = match cli.log_filter {
        Some(filter) => Some(filter),
        None => configured_log_filter().await,
    };
    init_logging(log_filter.as_deref());

    match cli.command {
        Commands::Init(args) => handle_init(&args).await?,
        Commands::Validate(args) => handle_validate(&args).await?,
        Commands::Manifest(args) => handle_manifest(&args).await?,
        Commands::Check(args) => handle_check(&args).await?,
        Commands::Publish(args) => handle_publish(&args).await?,
        Commands::VerifyTestMod(args) => handle_verify_test_mod(&args).await?,
        Commands::Run(args) => handle_run(&args).await?,
        Commands::Config(args) => handle_config(&args).await?,
    }
    Ok(())
}
