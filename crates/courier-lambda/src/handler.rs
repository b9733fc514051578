use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, RequestExt, Response};
use serde_json::Value;
use tracing::{debug, info};

use courier_core::models::chat_request::ChatRequest;
use courier_core::models::turn::Turn;

use crate::error::HandlerError;
use crate::response::{SuccessEnvelope, json_response};
use crate::state::AppState;

/// Entry point for one invocation.
///
/// Never fails past this boundary: every error, including a malformed
/// body or a dead upstream, becomes a well-formed 500 envelope carrying
/// the fixed header set.
pub async fn handle(state: &AppState, event: Request) -> Response<Body> {
    log_invocation(&event);

    match forward_chat(state, &event).await {
        Ok(envelope) => match serde_json::to_string(&envelope) {
            Ok(body) => json_response(StatusCode::OK, body),
            Err(e) => HandlerError::Unclassified(e.to_string()).into_response(),
        },
        Err(e) => e.into_response(),
    }
}

/// Parse the request, make the single upstream call, and assemble the
/// updated history.
async fn forward_chat(
    state: &AppState,
    event: &Request,
) -> Result<SuccessEnvelope, HandlerError> {
    let request = parse_body(event.body())?;

    info!(
        history_len = request.conversation_history.len(),
        "processing chat message"
    );

    // Only the latest message goes upstream; the endpoint never sees
    // prior history.
    let assistant_response = state.inference.send_message(&request.message).await?;

    let mut history = request.conversation_history;
    history.push(Turn::user(request.message));
    history.push(Turn::assistant(assistant_response.clone()));

    Ok(SuccessEnvelope {
        success: true,
        response: assistant_response,
        conversation_history: history,
    })
}

fn parse_body(body: &Body) -> Result<ChatRequest, HandlerError> {
    let raw = match body {
        Body::Text(text) => text.as_str(),
        Body::Empty => "",
        Body::Binary(bytes) => std::str::from_utf8(bytes)
            .map_err(|e| HandlerError::RequestParse(e.to_string()))?,
        // `Body` is #[non_exhaustive]; future variants are unparseable here.
        _ => {
            return Err(HandlerError::RequestParse(
                "unsupported request body type".to_string(),
            ));
        }
    };

    serde_json::from_str(raw).map_err(|e| HandlerError::RequestParse(e.to_string()))
}

/// Diagnostic logging for the invocation: the Cognito identity attached
/// by the authorizer (when present) and the region parsed from the
/// function ARN. Neither affects control flow.
fn log_invocation(event: &Request) {
    if let Some(claims) = event
        .request_context_ref()
        .and_then(|ctx| ctx.authorizer())
        .and_then(|auth| auth.fields.get("claims"))
    {
        let user = claims
            .get("email")
            .or_else(|| claims.get("cognito:username"))
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        info!(user, "authenticated caller");
    }

    let context = event.lambda_context();
    debug!(
        region = region_from_arn(&context.invoked_function_arn),
        "invocation region"
    );
}

/// Pull the region out of a Lambda function ARN
/// (`arn:aws:lambda:<region>:<account>:function:<name>`), defaulting to
/// `us-east-1` when the ARN does not look like one.
pub fn region_from_arn(arn: &str) -> &str {
    arn.strip_prefix("arn:aws:lambda:")
        .and_then(|rest| rest.split(':').next())
        .filter(|region| !region.is_empty())
        .unwrap_or("us-east-1")
}
