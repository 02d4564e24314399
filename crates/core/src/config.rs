use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::path::PathBuf;

use crate::error::ConfigurationError;
use crate::module::{ModuleDescriptor, ModuleExtension};

/// Loaded from `.modkit/config.json`, declares the root version, the modules and how they publish.
///
/// Module versions are pinned to `version`; per-module overrides that disagree with it are
/// rejected during validation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root project version shared by every module
    pub version: String,

    /// Maven group prefix (e.g. "org.example")
    pub organization: String,

    /// Base URL of the release repository
    #[serde(default = "default_repository_url")]
    pub repository_url: String,

    /// Directory the manifest is generated into, relative to the repository root
    #[serde(default = "default_generated_dir")]
    pub generated_dir: PathBuf,

    #[serde(default)]
    pub modules: BTreeMap<String, ModuleExtension>,

    /// Default publish command. `{module}`, `{library}` and `{version}` are substituted per module.
    #[serde(default = "default_publish_command")]
    pub publish_command: String,

    /// Publish command overrides by module name
    #[serde(default)]
    pub publish: HashMap<String, String>,

    /// Test harness run configurations
    #[serde(default)]
    pub runs: HashMap<RunKind, RunConfig>,

    #[serde(default)]
    pub test_mod: Option<TestModConfig>,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_repository_url() -> String {
    "https://maven.example.org".to_string()
}

fn default_generated_dir() -> PathBuf {
    PathBuf::from("build/generated/generated_resources")
}

fn default_publish_command() -> String {
    "./gradlew :{module}:publish".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "0.0.0".to_string(),
            organization: String::new(),
            repository_url: default_repository_url(),
            generated_dir: default_generated_dir(),
            modules: BTreeMap::new(),
            publish_command: default_publish_command(),
            publish: HashMap::new(),
            runs: HashMap::new(),
            test_mod: None,
            log_filter: None,
        }
    }
}

impl Config {
    /// Validate a single module by name.
    ///
    /// # Errors
    /// Returns error if the module is unknown or fails validation.
    pub fn module(&self, name: &str) -> Result<ModuleDescriptor, ConfigurationError> {
        self.modules
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownModule(name.to_string()))?
            .validate(name, &self.version, &self.organization)
    }

    /// Validate every module, ordered by name. Stops at the first invalid one.
    ///
    /// # Errors
    /// Returns the first validation failure.
    pub fn resolve_modules(&self) -> Result<Vec<ModuleDescriptor>, ConfigurationError> {
        self.modules
            .iter()
            .map(|(name, extension)| extension.validate(name, &self.version, &self.organization))
            .collect()
    }

    /// # Errors
    /// Returns error if no run configuration of this kind exists.
    pub fn run(&self, kind: RunKind) -> Result<&RunConfig, ConfigurationError> {
        self.runs
            .get(&kind)
            .ok_or_else(|| ConfigurationError::MissingRun(kind.to_string()))
    }
}

/// The two test harness variants.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Client,
    Server,
}

impl Display for RunKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Client => "client",
            Self::Server => "server",
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    pub command: String,

    /// Relative to the repository root; defaults to the root itself
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestModConfig {
    /// Path of the test mod descriptor, relative to the repository root
    pub descriptor: PathBuf,
}
