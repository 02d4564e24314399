use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tokio::fs::{create_dir_all, read_to_string, write};

use crate::module::ModuleDescriptor;

/// File name of the generated manifest inside the generated resources directory
pub const MANIFEST_FILE_NAME: &str = "modkit.module.json";

pub const MANIFEST_SCHEMA_VERSION: u64 = 1;

/// Render the manifest for a module.
///
/// Keys are emitted in sorted order so identical descriptors always render to identical bytes.
/// Extra manifest fields never override the generated ones.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_manifest(descriptor: &ModuleDescriptor) -> Result<String> {
    let mut manifest = Map::new();
    for (key, value) in descriptor.extra_manifest_fields() {
        manifest.insert(key.clone(), value.clone());
    }

    let generated = [
        ("schemaVersion", Value::from(MANIFEST_SCHEMA_VERSION)),
        (
            "id",
            Value::from(format!("{}-{}", descriptor.library(), descriptor.name())),
        ),
        ("name", Value::from(descriptor.name())),
        ("library", Value::from(descriptor.library())),
        ("group", Value::from(descriptor.group())),
        ("version", Value::from(descriptor.version())),
    ];
    for (key, value) in generated {
        if manifest.insert(key.to_string(), value).is_some() {
            tracing::warn!(
                module = descriptor.name(),
                field = key,
                "extra manifest field shadows a generated field and was ignored"
            );
        }
    }

    let mut rendered = serde_json::to_string_pretty(&Value::Object(manifest))?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the manifest for `descriptor` into `output_dir`, returning its path.
///
/// The file is left untouched when it already holds the rendered content.
///
/// # Errors
/// Returns error if rendering or writing the manifest fails.
pub async fn generate_manifest(descriptor: &ModuleDescriptor, output_dir: &Path) -> Result<PathBuf> {
    let rendered = render_manifest(descriptor)?;
    let path = output_dir.join(MANIFEST_FILE_NAME);

    if read_to_string(&path).await.is_ok_and(|existing| existing == rendered) {
        tracing::debug!(path = %path.display(), "manifest up to date");
        return Ok(path);
    }

    create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    write(&path, rendered)
        .await
        .with_context(|| format!("Failed to write manifest {}", path.display()))?;
    tracing::info!(module = descriptor.name(), path = %path.display(), "generated manifest");
    Ok(path)
}
