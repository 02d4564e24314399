use anyhow::Result;
use clap::Args;
use modkit_core::generate_manifest;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Generate module manifests into the generated resources directory")]
pub struct ManifestArgs {
    /// Module to generate for (all modules when omitted)
    module: Option<String>,
}

/// Generate module manifests
///
/// # Errors
/// Returns error if a module is invalid or its manifest cannot be written.
pub async fn handle_manifest(args: &ManifestArgs) -> Result<()> {
    let ctx = CommandContext::new().await?;
    for module in ctx.modules(args.module.as_deref())? {
        let path = generate_manifest(&module, &ctx.generated_dir(&module)).await?;
        println!("{}", path.display());
    }
    Ok(())
}
