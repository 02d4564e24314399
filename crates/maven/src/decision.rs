use modkit_core::{FetchError, PublishCheck, PublishDecision};

use crate::{Coordinates, PomFetcher, parse_pom};

/// Look up the published POM of the module at `coordinates` and walk its [`PublishCheck`]
/// to a terminal state.
///
/// A missing POM means nothing was published yet. A POM recording `current_hash` means the
/// artifact is unchanged. Any other lookup or parse failure ends the check in
/// `PublishState::FetchError`.
pub fn check_publish(
    fetcher: &dyn PomFetcher,
    repository_url: &str,
    coordinates: &Coordinates,
    current_hash: &str,
) -> PublishCheck {
    let check = PublishCheck::new();
    let url = coordinates.pom_url(repository_url);
    let content = match fetcher.fetch_pom(&url) {
        Ok(Some(content)) => content,
        Ok(None) => {
            tracing::info!(module = %coordinates.module, url, "no published pom");
            return check.not_found();
        }
        Err(e) => {
            tracing::warn!(module = %coordinates.module, error = %e, "pom lookup failed");
            return check.failed(e);
        }
    };

    let pom = match parse_pom(&content) {
        Ok(pom) => pom,
        Err(e) => {
            tracing::warn!(module = %coordinates.module, url, error = %e, "unreadable pom");
            return check.failed(FetchError::Parse {
                url,
                reason: e.to_string(),
            });
        }
    };

    let published = pom.published_hash();
    let check = check.found(published, current_hash);
    tracing::info!(
        module = %coordinates.module,
        published = published.unwrap_or("<none>"),
        current = current_hash,
        state = ?check.state(),
        "compared published pom"
    );
    check
}

/// Decide whether the module at `coordinates` needs publishing for `current_hash`.
///
/// # Errors
/// Returns error if the lookup fails for any reason other than "not found", or the POM
/// cannot be parsed.
pub fn should_publish(
    fetcher: &dyn PomFetcher,
    repository_url: &str,
    coordinates: &Coordinates,
    current_hash: &str,
) -> Result<PublishDecision, FetchError> {
    check_publish(fetcher, repository_url, coordinates, current_hash).into_decision()
}

#[cfg(test)]
mod tests {
    use super::*;
    use modkit_core::{PublishOutcome, PublishReason, PublishState};
    use std::collections::HashMap;

    const REPOSITORY: &str = "https://maven.example.org";

    /// In-memory repository keyed by URL
    #[derive(Default)]
    struct MockFetcher {
        documents: HashMap<String, String>,
        error: Option<FetchError>,
    }

    impl MockFetcher {
        fn with_pom(coordinates: &Coordinates, content: &str) -> Self {
            let mut documents = HashMap::new();
            documents.insert(coordinates.pom_url(REPOSITORY), content.to_string());
            Self {
                documents,
                error: None,
            }
        }
    }

    impl PomFetcher for MockFetcher {
        fn fetch_pom(&self, url: &str) -> Result<Option<String>, FetchError> {
            if let Some(error) = &self.error {
                return Err(error.clone());
            }
            Ok(self.documents.get(url).cloned())
        }
    }

    fn pom_with_hash(hash: &str) -> String {
        format!(
            "<project><artifactId>events</artifactId><properties><hash>{hash}</hash></properties></project>"
        )
    }

    fn events() -> Coordinates {
        Coordinates::new("org.example", "core", "events", "1.0.0")
    }

    #[test]
    fn test_should_publish_when_not_found() {
        let decision = should_publish(&MockFetcher::default(), REPOSITORY, &events(), "abc123");
        assert_eq!(decision, Ok(PublishDecision::Publish(PublishReason::NotFound)));
    }

    #[test]
    fn test_should_skip_when_hash_matches() {
        let fetcher = MockFetcher::with_pom(&events(), &pom_with_hash("abc123"));
        let decision = should_publish(&fetcher, REPOSITORY, &events(), "abc123").unwrap();
        assert_eq!(decision, PublishDecision::Skip);
        assert!(!decision.should_publish());
    }

    #[test]
    fn test_should_publish_when_hash_differs() {
        let fetcher = MockFetcher::with_pom(&events(), &pom_with_hash("abc123"));
        let decision = should_publish(&fetcher, REPOSITORY, &events(), "def456");
        assert_eq!(
            decision,
            Ok(PublishDecision::Publish(PublishReason::HashMismatch))
        );
    }

    #[test]
    fn test_should_publish_when_hash_absent() {
        let fetcher = MockFetcher::with_pom(&events(), "<project><version>1.0.0</version></project>");
        let decision = should_publish(&fetcher, REPOSITORY, &events(), "abc123");
        assert_eq!(
            decision,
            Ok(PublishDecision::Publish(PublishReason::HashMismatch))
        );
    }

    #[test]
    fn test_other_version_does_not_count() {
        let other = Coordinates::new("org.example", "core", "events", "0.9.0");
        let fetcher = MockFetcher::with_pom(&other, &pom_with_hash("abc123"));
        let decision = should_publish(&fetcher, REPOSITORY, &events(), "abc123");
        assert_eq!(decision, Ok(PublishDecision::Publish(PublishReason::NotFound)));
    }

    #[test]
    fn test_fetch_error_propagates() {
        let fetcher = MockFetcher {
            error: Some(FetchError::Http {
                url: events().pom_url(REPOSITORY),
                reason: "connection reset".to_string(),
            }),
            ..Default::default()
        };
        let decision = should_publish(&fetcher, REPOSITORY, &events(), "abc123");
        assert!(matches!(decision, Err(FetchError::Http { .. })));
    }

    #[test]
    fn test_parse_error_propagates() {
        let fetcher = MockFetcher::with_pom(&events(), "<project><properties>");
        let decision = should_publish(&fetcher, REPOSITORY, &events(), "abc123");
        assert!(matches!(decision, Err(FetchError::Parse { .. })));
    }

    #[test]
    fn test_check_ends_in_fetch_error_state() {
        let error = FetchError::Http {
            url: events().pom_url(REPOSITORY),
            reason: "503 Service Unavailable".to_string(),
        };
        let fetcher = MockFetcher {
            error: Some(error.clone()),
            ..Default::default()
        };
        let check = check_publish(&fetcher, REPOSITORY, &events(), "abc123");
        assert_eq!(check.state(), PublishState::FetchError);
        assert_eq!(check.state().outcome(), Some(PublishOutcome::Fail));
        assert_eq!(check.error(), Some(&error));
    }

    #[test]
    fn test_check_unparsable_pom_fails() {
        let fetcher = MockFetcher::with_pom(&events(), "<project><properties>");
        let check = check_publish(&fetcher, REPOSITORY, &events(), "abc123");
        assert_eq!(check.state(), PublishState::FetchError);
        assert!(matches!(check.error(), Some(FetchError::Parse { .. })));
    }

    #[test]
    fn test_check_states_for_published_pom() {
        let fetcher = MockFetcher::with_pom(&events(), &pom_with_hash("abc123"));
        assert_eq!(
            check_publish(&fetcher, REPOSITORY, &events(), "abc123").state(),
            PublishState::FoundMatch
        );
        assert_eq!(
            check_publish(&fetcher, REPOSITORY, &events(), "def456").state(),
            PublishState::FoundMismatch
        );
        assert_eq!(
            check_publish(&MockFetcher::default(), REPOSITORY, &events(), "abc123").state(),
            PublishState::NotFound
        );
    }
}
