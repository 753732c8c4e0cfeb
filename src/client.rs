//! HTTP client for the scraping service.
//!
//! Wraps `reqwest` with the service's error envelope handling. The base URL
//! is injectable so tests can point the client at a mock server.

use reqwest::Url;
use tracing::debug;

use crate::constants::GENERIC_SCRAPE_ERROR;
use crate::types::{Business, ErrorBody, ScrapePhase, ScrapeRequest, ScrapeResponse};

/// Errors surfaced by a scrape request. The `Display` text of each variant is
/// exactly what the user sees, so the server's `error` field passes through
/// verbatim and transport failures keep their underlying message.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The service answered non-2xx with an error envelope.
    #[error("{0}")]
    Api(String),

    /// A response body (success or error) could not be parsed as JSON.
    #[error("{0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("invalid endpoint URL '{0}'")]
    InvalidEndpoint(String),
}

/// Client for the scraping service.
///
/// Deliberately built without a request timeout: the service holds the
/// connection open for the whole browser-automation run, which can take
/// minutes for large result limits.
#[derive(Clone)]
pub struct ScrapeClient {
    client: reqwest::Client,
    scrape_url: Url,
}

impl ScrapeClient {
    /// Creates a client for the given service base URL, e.g.
    /// `http://127.0.0.1:5000`. A trailing slash is tolerated.
    pub fn new(base_url: &str) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("maps-business-scraper/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let scrape_url = Url::parse(&normalised)
            .and_then(|base| base.join("scrape"))
            .map_err(|_| ScrapeError::InvalidEndpoint(base_url.to_owned()))?;

        Ok(Self { client, scrape_url })
    }

    pub fn endpoint(&self) -> &str {
        self.scrape_url.as_str()
    }

    /// Posts one scrape request and awaits its single resolution.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::Api`] when the service answers non-2xx; carries the
    ///   envelope's `error` field, or the generic message when absent.
    /// - [`ScrapeError::Http`] on connection-level failure.
    /// - [`ScrapeError::Deserialize`] when a body is not valid JSON.
    pub async fn scrape(&self, request: &ScrapeRequest) -> Result<Vec<Business>, ScrapeError> {
        debug!(url = %self.scrape_url, term = %request.search_for, total = request.total, "POST scrape");

        let response = self
            .client
            .post(self.scrape_url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let envelope: ErrorBody = serde_json::from_str(&body)?;
            if let Some(details) = &envelope.details {
                debug!(status = %status, details = %details, "Service reported failure details");
            }
            return Err(ScrapeError::Api(
                envelope
                    .error
                    .unwrap_or_else(|| GENERIC_SCRAPE_ERROR.to_owned()),
            ));
        }

        let payload: ScrapeResponse = serde_json::from_str(&body)?;
        Ok(payload.businesses)
    }
}

/// The single resolution of one submit cycle, ready for the UI to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeOutcome {
    Results(Vec<Business>),
    Empty,
    Failed(String),
}

impl ScrapeOutcome {
    /// Terminal phase this resolution transitions the UI into.
    pub fn phase(&self) -> ScrapePhase {
        match self {
            ScrapeOutcome::Results(_) => ScrapePhase::Results,
            ScrapeOutcome::Empty => ScrapePhase::Empty,
            ScrapeOutcome::Failed(_) => ScrapePhase::Error,
        }
    }
}

/// Collapses a finished request into its terminal outcome. An empty business
/// list is a valid "no results" display state, not an error.
pub fn resolve_outcome(result: Result<Vec<Business>, ScrapeError>) -> ScrapeOutcome {
    match result {
        Ok(businesses) if businesses.is_empty() => ScrapeOutcome::Empty,
        Ok(businesses) => ScrapeOutcome::Results(businesses),
        Err(e) => ScrapeOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalises_trailing_slash() {
        let a = ScrapeClient::new("http://127.0.0.1:5000").unwrap();
        let b = ScrapeClient::new("http://127.0.0.1:5000/").unwrap();
        assert_eq!(a.endpoint(), "http://127.0.0.1:5000/scrape");
        assert_eq!(a.endpoint(), b.endpoint());
    }

    #[test]
    fn new_rejects_garbage_endpoints() {
        assert!(matches!(
            ScrapeClient::new("not a url"),
            Err(ScrapeError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn outcome_resolution_covers_the_three_terminal_states() {
        assert_eq!(resolve_outcome(Ok(vec![])), ScrapeOutcome::Empty);

        let one = vec![Business {
            name: Some("Joe's".into()),
            ..Business::default()
        }];
        assert_eq!(
            resolve_outcome(Ok(one.clone())),
            ScrapeOutcome::Results(one)
        );

        let failed = resolve_outcome(Err(ScrapeError::Api("rate limited".into())));
        assert_eq!(failed, ScrapeOutcome::Failed("rate limited".into()));
    }

    #[test]
    fn outcome_phases_match_the_state_machine() {
        assert_eq!(ScrapeOutcome::Empty.phase(), ScrapePhase::Empty);
        assert_eq!(
            ScrapeOutcome::Results(vec![Business::default()]).phase(),
            ScrapePhase::Results
        );
        assert_eq!(
            ScrapeOutcome::Failed("x".into()).phase(),
            ScrapePhase::Error
        );
    }
}
