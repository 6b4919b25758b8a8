//! HTTP client for the insight/strategy service

use crate::fallback::fallback_payload;
use crate::payload::{AdvisoryPayload, AdvisoryRequest};
use medrez_model::{Case, CaseEvent};
use std::time::Duration;

/// Hard cap on the advisory round trip
pub const ADVISOR_TIMEOUT: Duration = Duration::from_secs(12);

/// Failure to obtain a usable advisory from the service
///
/// Every variant is recoverable: [`AdvisorClient::advise_or_fallback`]
/// converts them all into the deterministic path.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// Transport failure, including the 12s timeout
    #[error("advisor request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("advisor returned status {0}")]
    Status(u16),

    /// Body did not parse into the advisory shape
    #[error("advisor response malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Parsed payload carried no actions and no recommendation
    #[error("advisor returned an empty payload")]
    Empty,
}

/// Which path produced an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorySource {
    /// The external service answered with a usable payload
    Service,
    /// Derived locally from the rule engine
    RuleEngine,
}

/// An advisory plus the path that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    pub payload: AdvisoryPayload,
    pub source: AdvisorySource,
}

/// Client for the external insight/strategy endpoint
#[derive(Debug, Clone)]
pub struct AdvisorClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AdvisorClient {
    /// Build a client with the hard advisory timeout
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(ADVISOR_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// POST the request and validate the response
    ///
    /// Non-2xx, malformed JSON, and empty payloads are all errors here;
    /// the caller decides whether to fall back.
    pub async fn request_advisory(
        &self,
        request: &AdvisoryRequest,
    ) -> Result<AdvisoryPayload, AdvisorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AdvisorError::Status(response.status().as_u16()));
        }

        let raw = response.text().await?;
        let payload: AdvisoryPayload = serde_json::from_str(&raw)?;
        if payload.is_empty() {
            return Err(AdvisorError::Empty);
        }
        Ok(payload)
    }

    /// Advisory for a case, never failing
    ///
    /// Any service failure degrades to the rule-engine payload; only the
    /// source tag tells the caller which path answered.
    pub async fn advise_or_fallback(
        &self,
        case: &Case,
        recent_events: &[&CaseEvent],
    ) -> Advisory {
        let request = AdvisoryRequest::for_case(case, recent_events);
        match self.request_advisory(&request).await {
            Ok(payload) => Advisory {
                payload,
                source: AdvisorySource::Service,
            },
            Err(err) => {
                tracing::warn!(case_id = %case.id, %err, "advisor unavailable, using rule engine");
                Advisory {
                    payload: fallback_payload(case),
                    source: AdvisorySource::RuleEngine,
                }
            }
        }
    }
}
