use serde::Deserialize;

/// The part of a published POM modkit reads. Everything else is ignored.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Pom {
    #[serde(default)]
    pub properties: Option<PomProperties>,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct PomProperties {
    /// Commit hash the artifact was published from
    #[serde(default)]
    pub hash: Option<String>,
}

impl Pom {
    /// The recorded commit hash, if present and non-blank
    #[must_use]
    pub fn published_hash(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|properties| properties.hash.as_deref())
            .map(str::trim)
            .filter(|hash| !hash.is_empty())
    }
}

/// # Errors
/// Returns error if the document is not well-formed XML.
pub fn parse_pom(content: &str) -> Result<Pom, quick_xml::DeError> {
    quick_xml::de::from_str(content)
}
