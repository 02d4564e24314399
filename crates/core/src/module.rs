use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigurationError;

/// Per-module settings as declared in `.modkit/config.json`.
///
/// Everything here is optional until [`ModuleExtension::validate`] turns it into a
/// [`ModuleDescriptor`].
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleExtension {
    /// Library the module belongs to (e.g. "core")
    #[serde(default)]
    pub library: Option<String>,

    /// Version override. Only accepted when equal to the root version.
    #[serde(default)]
    pub version: Option<String>,

    /// Module directory relative to the repository root. Defaults to the module name.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Extra fields copied verbatim into the generated manifest
    #[serde(default)]
    pub manifest: BTreeMap<String, Value>,
}

impl ModuleExtension {
    /// # Errors
    /// Returns error if the name, organization or library is empty, or the version is not the
    /// root version.
    pub fn validate(
        &self,
        name: &str,
        root_version: &str,
        organization: &str,
    ) -> Result<ModuleDescriptor, ConfigurationError> {
        if name.trim().is_empty() {
            return Err(ConfigurationError::EmptyModuleName);
        }
        let organization = organization.trim();
        if organization.is_empty() {
            return Err(ConfigurationError::MissingOrganization);
        }
        let library = self
            .library
            .as_deref()
            .map(str::trim)
            .filter(|library| !library.is_empty())
            .ok_or_else(|| ConfigurationError::MissingLibrary {
                module: name.to_string(),
            })?;
        if let Some(version) = self.version.as_ref().filter(|version| *version != root_version) {
            return Err(ConfigurationError::VersionMismatch {
                module: name.to_string(),
                module_version: version.clone(),
                root_version: root_version.to_string(),
            });
        }

        Ok(ModuleDescriptor {
            name: name.to_string(),
            library: library.to_string(),
            organization: organization.to_string(),
            version: root_version.to_string(),
            directory: self.path.clone().unwrap_or_else(|| PathBuf::from(name)),
            extra_manifest_fields: self.manifest.clone(),
        })
    }
}

/// A validated module. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDescriptor {
    name: String,
    library: String,
    organization: String,
    version: String,
    directory: PathBuf,
    extra_manifest_fields: BTreeMap<String, Value>,
}

impl ModuleDescriptor {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn library(&self) -> &str {
        &self.library
    }

    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Module directory relative to the repository root
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn extra_manifest_fields(&self) -> &BTreeMap<String, Value> {
        &self.extra_manifest_fields
    }

    /// Base name of the built archive
    #[must_use]
    pub fn archive_base_name(&self) -> &str {
        &self.name
    }

    /// Maven group, `{organization}.{library}`
    #[must_use]
    pub fn group(&self) -> String {
        format!("{}.{}", self.organization, self.library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn extension(library: Option<&str>, version: Option<&str>) -> ModuleExtension {
        ModuleExtension {
            library: library.map(String::from),
            version: version.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_success() {
        let descriptor = extension(Some("core"), None)
            .validate("events", "1.0.0", "org.example")
            .unwrap();
        assert_eq!(descriptor.name(), "events");
        assert_eq!(descriptor.library(), "core");
        assert_eq!(descriptor.version(), "1.0.0");
        assert_eq!(descriptor.archive_base_name(), "events");
        assert_eq!(descriptor.group(), "org.example.core");
        assert_eq!(descriptor.directory(), Path::new("events"));
    }

    #[test]
    fn test_validate_custom_directory() {
        let mut ext = extension(Some("core"), None);
        ext.path = Some(PathBuf::from("modules/events"));
        let descriptor = ext.validate("events", "1.0.0", "org.example").unwrap();
        assert_eq!(descriptor.directory(), Path::new("modules/events"));
    }

    #[test]
    fn test_validate_accepts_matching_version() {
        let descriptor = extension(Some("core"), Some("1.0.0"))
            .validate("events", "1.0.0", "org.example")
            .unwrap();
        assert_eq!(descriptor.version(), "1.0.0");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn test_validate_missing_library(#[case] library: Option<&str>) {
        let result = extension(library, None).validate("events", "1.0.0", "org.example");
        assert_eq!(
            result,
            Err(ConfigurationError::MissingLibrary {
                module: "events".to_string()
            })
        );
    }

    #[rstest]
    #[case("1.0.1")]
    #[case("2.0.0")]
    #[case("1.0.0-SNAPSHOT")]
    fn test_validate_version_mismatch(#[case] version: &str) {
        let result = extension(Some("core"), Some(version)).validate("events", "1.0.0", "org.example");
        assert!(matches!(
            result,
            Err(ConfigurationError::VersionMismatch { .. })
        ));
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn test_validate_missing_organization(#[case] organization: &str) {
        let result = extension(Some("core"), None).validate("events", "1.0.0", organization);
        assert_eq!(result, Err(ConfigurationError::MissingOrganization));
    }

    #[test]
    fn test_validate_empty_name() {
        let result = extension(Some("core"), None).validate("", "1.0.0", "org.example");
        assert_eq!(result, Err(ConfigurationError::EmptyModuleName));
    }

    #[test]
    fn test_validate_keeps_manifest_fields() {
        let mut ext = extension(Some("core"), None);
        ext.manifest
            .insert("description".to_string(), Value::from("Event bus"));
        let descriptor = ext.validate("events", "1.0.0", "org.example").unwrap();
        assert_eq!(
            descriptor.extra_manifest_fields().get("description"),
            Some(&Value::from("Event bus"))
        );
    }
}
