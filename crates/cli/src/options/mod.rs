mod format_options;
mod run_options;

pub use format_options::FormatOptions;
pub use run_options::CliRunKind;
