use std::sync::OnceLock;
use std::time::Duration;

use modkit_core::FetchError;

/// Network timeout for POM lookups.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves published POM documents.
///
/// Lets the publish decision run against an in-memory repository in tests.
pub trait PomFetcher: Send + Sync {
    /// Fetch the document at `url`. `Ok(None)` means the repository has no such document.
    ///
    /// # Errors
    /// Returns error for any failure other than "not found".
    fn fetch_pom(&self, url: &str) -> Result<Option<String>, FetchError>;
}

/// Blocking HTTP fetcher using `ureq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPomFetcher;

impl PomFetcher for HttpPomFetcher {
    fn fetch_pom(&self, url: &str) -> Result<Option<String>, FetchError> {
        tracing::debug!(url, "fetching published pom");
        let response = match http_agent().get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(404)) => return Ok(None),
            Err(e) => return Err(map_ureq_error(url, &e)),
        };
        response
            .into_body()
            .read_to_string()
            .map(Some)
            .map_err(|e| map_ureq_error(url, &e))
    }
}

/// Shared `ureq` agent with request timeout configuration.
fn http_agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build();
        ureq::Agent::new_with_config(config)
    })
}

fn map_ureq_error(url: &str, err: &ureq::Error) -> FetchError {
    FetchError::Http {
        url: url.to_owned(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_ureq_error_keeps_url() {
        let err = ureq::Error::StatusCode(500);
        let mapped = map_ureq_error("https://maven.example.org/events.pom", &err);
        assert!(matches!(
            mapped,
            FetchError::Http { ref url, .. } if url == "https://maven.example.org/events.pom"
        ));
    }

    #[test]
    fn test_fetch_unreachable_host_is_error() {
        // Port 9 on localhost refuses connections
        let result = HttpPomFetcher.fetch_pom("http://127.0.0.1:9/missing.pom");
        assert!(matches!(result, Err(FetchError::Http { .. })));
    }
}
