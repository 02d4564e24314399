mod check;
mod config;
mod init;
mod manifest;
mod publish;
mod run;
mod validate;
mod verify_test_mod;

pub use check::CheckArgs;
pub use check::handle_check;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use init::InitArgs;
pub use init::handle_init;
pub use manifest::ManifestArgs;
pub use manifest::handle_manifest;
pub use publish::PublishArgs;
pub use publish::handle_publish;
pub use run::RunArgs;
pub use run::handle_run;
pub use validate::ValidateArgs;
pub use validate::handle_validate;
pub use verify_test_mod::VerifyTestModArgs;
pub use verify_test_mod::handle_verify_test_mod;
