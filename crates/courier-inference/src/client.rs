//! Client for the fixed external inference endpoint.
//!
//! The endpoint is stateless from this client's perspective: each call
//! carries exactly one user message and no prior history, and there is
//! exactly one attempt per call. Retries, if ever wanted, belong to the
//! caller.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InferenceError;

/// Substituted when the upstream JSON omits the `response` field.
pub const NO_RESPONSE_FALLBACK: &str = "No response from external API";

/// The outbound request body. Only the latest user message is forwarded.
#[derive(Debug, Serialize)]
struct OutboundPayload<'a> {
    message: &'a str,
}

/// The upstream response body. `response` is optional on the wire.
#[derive(Debug, Deserialize)]
struct UpstreamResponse {
    response: Option<String>,
}

/// Built once at process start and shared across invocations; the inner
/// `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    endpoint: String,
}

impl InferenceClient {
    /// Build a client for `endpoint`. `timeout` caps the whole request;
    /// `None` keeps the transport default.
    pub fn new(endpoint: String, timeout: Option<Duration>) -> Result<Self, InferenceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| InferenceError::Config(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    /// Forward one user message and return the assistant's reply.
    ///
    /// Transport errors, non-2xx statuses, and unparseable bodies are
    /// surfaced to the caller without retry. A 2xx JSON body without a
    /// `response` field substitutes [`NO_RESPONSE_FALLBACK`] and still
    /// counts as success.
    pub async fn send_message(&self, message: &str) -> Result<String, InferenceError> {
        debug!(endpoint = %self.endpoint, "calling upstream inference endpoint");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&OutboundPayload { message })
            .send()
            .await
            .map_err(|e| InferenceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferenceError::Transport(format!(
                "upstream returned HTTP {status}"
            )));
        }

        let parsed: UpstreamResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::ResponseParse(e.to_string()))?;

        Ok(parsed
            .response
            .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string()))
    }
}
