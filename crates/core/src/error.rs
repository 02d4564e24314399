use thiserror::Error;

/// Module or project configuration that cannot be turned into a build.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("module name must not be empty")]
    EmptyModuleName,

    #[error("organization is not set")]
    MissingOrganization,

    #[error("library group is not set for module `{module}`")]
    MissingLibrary { module: String },

    /// Module versions are pinned to the root version.
    #[error(
        "module `{module}` declares version {module_version} but the root version is {root_version}"
    )]
    VersionMismatch {
        module: String,
        module_version: String,
        root_version: String,
    },

    #[error("unknown module `{0}`")]
    UnknownModule(String),

    #[error("no `{0}` run configuration")]
    MissingRun(String),

    #[error("no test mod descriptor configured")]
    MissingTestMod,
}

/// Remote descriptor lookups that failed for any reason other than "not found".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed for {url}: {reason}")]
    Http { url: String, reason: String },

    #[error("invalid descriptor at {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("published state was never looked up")]
    NotChecked,
}

/// A resource that does not carry a required marker.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("descriptor is not valid JSON: {0}")]
    Malformed(String),

    #[error("descriptor has no `{field}` field")]
    MissingField { field: &'static str },

    #[error("descriptor field `{field}` must be \"{expected}\", found {found}")]
    UnexpectedValue {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_mismatch_message() {
        let err = ConfigurationError::VersionMismatch {
            module: "events".to_string(),
            module_version: "1.1.0".to_string(),
            root_version: "1.0.0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("events"));
        assert!(msg.contains("1.1.0"));
        assert!(msg.contains("1.0.0"));
    }

    #[test]
    fn test_fetch_error_message_names_url() {
        let err = FetchError::Http {
            url: "https://maven.example.org/x.pom".to_string(),
            reason: "timeout".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request failed for https://maven.example.org/x.pom: timeout"
        );
    }
}
