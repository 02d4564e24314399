mod current_commit_hash;
mod find_current_git_repo;
mod get_modkit_config;
mod get_modkit_dir;
mod init_logging;

pub use current_commit_hash::current_commit_hash;
pub use find_current_git_repo::{find_current_git_repo, get_repo_root};
pub use get_modkit_config::get_modkit_config;
pub use get_modkit_dir::get_modkit_dir;
pub use init_logging::init_logging;
