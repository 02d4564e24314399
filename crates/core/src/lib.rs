//! # modkit-core
//!
//! Configuration model and build decisions for modkit: module validation, manifest
//! generation, test mod checks and the publish state machine.

pub mod command;
pub mod config;
pub mod error;
pub mod manifest;
pub mod module;
pub mod publish;
pub mod publish_result;
pub mod test_mod;

pub use command::{run_command, run_interactive};
pub use config::{Config, RunConfig, RunKind, TestModConfig};
pub use error::{ConfigurationError, FetchError, ValidationError};
pub use manifest::{MANIFEST_FILE_NAME, generate_manifest, render_manifest};
pub use module::{ModuleDescriptor, ModuleExtension};
pub use publish::{
    PublishCheck, PublishDecision, PublishOutcome, PublishReason, PublishState, resolve_publish_command,
};
pub use publish_result::PublishResult;
pub use test_mod::{validate_test_mod_descriptor, validate_test_mod_file};
