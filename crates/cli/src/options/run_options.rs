use clap::ValueEnum;
use modkit_core::RunKind;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliRunKind {
    Client,
    Server,
}

impl From<CliRunKind> for RunKind {
    fn from(value: CliRunKind) -> Self {
        match value {
            CliRunKind::Client => RunKind::Client,
            CliRunKind::Server => RunKind::Server,
        }
    }
}
