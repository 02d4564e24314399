use serde::Serialize;

use crate::publish::PublishDecision;

/// Per-module entry of the JSON publish report.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    version: String,
    decision: PublishDecision,
    published: bool,
    error: Option<String>,
}

impl PublishResult {
    pub fn new(
        version: String,
        decision: PublishDecision,
        published: bool,
        error: Option<String>,
    ) -> Self {
        Self {
            version,
            decision,
            published,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_result_serialize() {
        let result = PublishResult::new("1.0.0".to_string(), PublishDecision::Skip, false, None);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["decision"]["decision"], "skip");
        assert_eq!(value["published"], false);
        assert!(value["error"].is_null());
    }
}
