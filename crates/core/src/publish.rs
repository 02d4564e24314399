use crate::error::FetchError;
use crate::{Config, ModuleDescriptor};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

/// Where the publish check currently stands for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PublishState {
    #[default]
    Unchecked,
    NotFound,
    FoundMatch,
    FoundMismatch,
    FetchError,
}

/// Terminal outcome of a [`PublishState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PublishOutcome {
    Publish,
    Skip,
    Fail,
}

impl PublishState {
    /// `None` while the check has not run yet
    #[must_use]
    pub const fn outcome(self) -> Option<PublishOutcome> {
        match self {
            Self::Unchecked => None,
            Self::NotFound | Self::FoundMismatch => Some(PublishOutcome::Publish),
            Self::FoundMatch => Some(PublishOutcome::Skip),
            Self::FetchError => Some(PublishOutcome::Fail),
        }
    }
}

/// Publish check of one module. Starts `Unchecked` and moves to a terminal state once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishCheck {
    state: PublishState,
    error: Option<FetchError>,
}

impl PublishCheck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> PublishState {
        self.state
    }

    /// Lookup error of a check that ended in [`PublishState::FetchError`]
    #[must_use]
    pub const fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    fn advance(self, state: PublishState, error: Option<FetchError>) -> Self {
        if self.state != PublishState::Unchecked {
            tracing::warn!(from = ?self.state, to = ?state, "publish check already finished");
            return self;
        }
        Self { state, error }
    }

    /// Nothing is published at the module's coordinates
    #[must_use]
    pub fn not_found(self) -> Self {
        self.advance(PublishState::NotFound, None)
    }

    /// A descriptor is published. `published_hash` is the commit it records, if any.
    #[must_use]
    pub fn found(self, published_hash: Option<&str>, current_hash: &str) -> Self {
        let state = if published_hash.is_some_and(|hash| hash.trim() == current_hash.trim()) {
            PublishState::FoundMatch
        } else {
            PublishState::FoundMismatch
        };
        self.advance(state, None)
    }

    #[must_use]
    pub fn failed(self, error: FetchError) -> Self {
        self.advance(PublishState::FetchError, Some(error))
    }

    /// # Errors
    /// Returns the lookup error of a failed check, or [`FetchError::NotChecked`] if the
    /// check never ran.
    pub fn into_decision(self) -> Result<PublishDecision, FetchError> {
        match self.state {
            PublishState::NotFound => Ok(PublishDecision::Publish(PublishReason::NotFound)),
            PublishState::FoundMismatch => {
                Ok(PublishDecision::Publish(PublishReason::HashMismatch))
            }
            PublishState::FoundMatch => Ok(PublishDecision::Skip),
            PublishState::FetchError => Err(self.error.unwrap_or(FetchError::NotChecked)),
            PublishState::Unchecked => Err(FetchError::NotChecked),
        }
    }
}

impl Display for PublishCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.state, &self.error) {
            (PublishState::Unchecked, _) => write!(f, "{}", "unchecked".dimmed()),
            (PublishState::FetchError, error) => {
                write!(f, "{}", "fail".red().bold())?;
                match error {
                    Some(error) => write!(f, " ({error})"),
                    None => Ok(()),
                }
            }
            _ => match self.clone().into_decision() {
                Ok(decision) => write!(f, "{decision}"),
                Err(error) => write!(f, "{} ({error})", "fail".red().bold()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PublishReason {
    /// Nothing has been published for this version yet
    NotFound,
    /// The published descriptor carries a different hash, or none
    HashMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "decision", content = "reason")]
pub enum PublishDecision {
    Publish(PublishReason),
    Skip,
}

impl PublishDecision {
    #[must_use]
    pub const fn should_publish(&self) -> bool {
        matches!(self, Self::Publish(_))
    }

    #[must_use]
    pub const fn state(&self) -> PublishState {
        match self {
            Self::Publish(PublishReason::NotFound) => PublishState::NotFound,
            Self::Publish(PublishReason::HashMismatch) => PublishState::FoundMismatch,
            Self::Skip => PublishState::FoundMatch,
        }
    }
}

impl Display for PublishDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Publish(PublishReason::NotFound) => {
                write!(f, "{} (not published yet)", "publish".green().bold())
            }
            Self::Publish(PublishReason::HashMismatch) => {
                write!(f, "{} (changed since last publish)", "publish".green().bold())
            }
            Self::Skip => write!(f, "{} (unchanged)", "skip".yellow().bold()),
        }
    }
}

/// Publish command for a module, with `{module}`, `{library}` and `{version}` substituted
#[must_use]
pub fn resolve_publish_command(module: &ModuleDescriptor, config: &Config) -> String {
    config
        .publish
        .get(module.name())
        .unwrap_or(&config.publish_command)
        .replace("{module}", module.name())
        .replace("{library}", module.library())
        .replace("{version}", module.version())
}
