use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::ValidationError;

pub const LOAD_TYPE_FIELD: &str = "load_type";
pub const ALWAYS_LOAD: &str = "always";

/// Check that a test mod descriptor is marked to always load.
///
/// The marker may sit on any object of the document, e.g. under `quilt_loader`.
///
/// # Errors
/// Returns error if the text is not JSON or no `load_type` field in it is `"always"`.
pub fn validate_test_mod_descriptor(text: &str) -> Result<(), ValidationError> {
    let document: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    let mut found = Vec::new();
    collect_load_types(&document, &mut found);
    if found
        .iter()
        .any(|load_type| load_type.as_str() == Some(ALWAYS_LOAD))
    {
        return Ok(());
    }
    match found.first() {
        Some(other) => Err(ValidationError::UnexpectedValue {
            field: LOAD_TYPE_FIELD,
            expected: ALWAYS_LOAD,
            found: other.to_string(),
        }),
        None => Err(ValidationError::MissingField {
            field: LOAD_TYPE_FIELD,
        }),
    }
}

/// Every `load_type` value in document order
fn collect_load_types<'a>(value: &'a Value, found: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => {
            if let Some(load_type) = map.get(LOAD_TYPE_FIELD) {
                found.push(load_type);
            }
            for child in map.values() {
                collect_load_types(child, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_load_types(item, found);
            }
        }
        _ => {}
    }
}

/// # Errors
/// Returns error if the file cannot be read or fails [`validate_test_mod_descriptor`].
pub async fn validate_test_mod_file(path: &Path) -> Result<()> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read test mod descriptor {}", path.display()))?;
    validate_test_mod_descriptor(&text)
        .with_context(|| format!("Invalid test mod descriptor {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case(r#"{"load_type":"always"}"#)]
    #[case(r#"{ "id": "testmod", "load_type": "always", "entrypoints": {} }"#)]
    #[case(r#"{"schema_version":1,"quilt_loader":{"id":"testmod","load_type":"always"}}"#)]
    #[case(r#"{"mods":[{"id":"other","load_type":"never"},{"id":"testmod","load_type":"always"}]}"#)]
    fn test_validate_passes(#[case] text: &str) {
        assert!(validate_test_mod_descriptor(text).is_ok());
    }

    #[test]
    fn test_validate_missing_field() {
        assert_eq!(
            validate_test_mod_descriptor(r#"{"id": "testmod"}"#),
            Err(ValidationError::MissingField {
                field: LOAD_TYPE_FIELD
            })
        );
    }

    #[rstest]
    #[case(r#"{"load_type":"never"}"#, "\"never\"")]
    #[case(r#"{"load_type":true}"#, "true")]
    fn test_validate_unexpected_value(#[case] text: &str, #[case] found: &str) {
        assert_eq!(
            validate_test_mod_descriptor(text),
            Err(ValidationError::UnexpectedValue {
                field: LOAD_TYPE_FIELD,
                expected: ALWAYS_LOAD,
                found: found.to_string(),
            })
        );
    }

    #[test]
    fn test_validate_nested_wrong_value() {
        let text = r#"{"schema_version":1,"quilt_loader":{"id":"testmod","load_type":"if_possible"}}"#;
        assert_eq!(
            validate_test_mod_descriptor(text),
            Err(ValidationError::UnexpectedValue {
                field: LOAD_TYPE_FIELD,
                expected: ALWAYS_LOAD,
                found: "\"if_possible\"".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_marker_as_text_is_not_enough() {
        let text = r#"{"description": "load_type always"}"#;
        assert!(validate_test_mod_descriptor(text).is_err());
    }

    #[test]
    fn test_validate_malformed() {
        assert!(matches!(
            validate_test_mod_descriptor("load_type=always"),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_validate_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("testmod.json");
        tokio::fs::write(&path, r#"{"load_type": "always"}"#)
            .await
            .unwrap();
        assert!(validate_test_mod_file(&path).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_test_mod_file(&temp_dir.path().join("missing.json")).await;
        assert!(result.is_err());
    }
}
