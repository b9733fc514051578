use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use thiserror::Error;

use courier_inference::error::InferenceError;

use crate::response::{ErrorEnvelope, json_response};

/// Failure taxonomy for the chat forwarding handler.
///
/// Every variant surfaces as a 500 with the error envelope; the kinds
/// exist for classification and logging, not for distinct status codes.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The event body was not valid JSON or lacked the `message` field.
    #[error("invalid request body: {0}")]
    RequestParse(String),

    /// The single outbound attempt failed: connect error, non-2xx status,
    /// or an unparseable upstream body.
    #[error("failed to call external API: {0}")]
    Upstream(#[from] InferenceError),

    /// Anything the other variants don't cover.
    #[error("internal error: {0}")]
    Unclassified(String),
}

impl HandlerError {
    /// Map to the uniform 500 error envelope. Logged here so every failure
    /// path is recorded exactly once.
    pub fn into_response(self) -> Response<Body> {
        tracing::error!("handler failed: {self}");

        let body = serde_json::to_string(&ErrorEnvelope {
            success: false,
            error: self.to_string(),
        })
        .unwrap_or_else(|_| r#"{"success":false,"error":"internal error"}"#.to_string());

        json_response(StatusCode::INTERNAL_SERVER_ERROR, body)
    }
}
