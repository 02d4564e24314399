use modkit_core::ModuleDescriptor;

/// Location of a module's artifacts in the release repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub organization: String,
    pub library: String,
    pub module: String,
    pub version: String,
}

impl Coordinates {
    #[must_use]
    pub fn new(organization: &str, library: &str, module: &str, version: &str) -> Self {
        Self {
            organization: organization.to_string(),
            library: library.to_string(),
            module: module.to_string(),
            version: version.to_string(),
        }
    }

    /// URL of the published POM for these coordinates
    #[must_use]
    pub fn pom_url(&self, repository_url: &str) -> String {
        format!(
            "{}/repository/release/{}/{}/{module}/{version}/{module}-{version}.pom",
            repository_url.trim_end_matches('/'),
            self.organization.replace('.', "/"),
            self.library,
            module = self.module,
            version = self.version,
        )
    }
}

impl From<&ModuleDescriptor> for Coordinates {
    fn from(descriptor: &ModuleDescriptor) -> Self {
        Self::new(
            descriptor.organization(),
            descriptor.library(),
            descriptor.name(),
            descriptor.version(),
        )
    }
}
