//! Integration tests for the inference client, run against a local stub
//! server standing in for the external endpoint.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use courier_inference::client::{InferenceClient, NO_RESPONSE_FALLBACK};
use courier_inference::error::InferenceError;

/// Bind a stub server on an ephemeral port and return its URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{addr}/")
}

fn client(endpoint: String) -> InferenceClient {
    InferenceClient::new(endpoint, None).expect("build client")
}

#[tokio::test]
async fn returns_the_response_field() {
    let endpoint = serve(Router::new().route(
        "/",
        post(|| async { Json(json!({"response": "hello"})) }),
    ))
    .await;

    let reply = client(endpoint).send_message("hi").await.unwrap();
    assert_eq!(reply, "hello");
}

#[tokio::test]
async fn forwards_only_the_latest_message() {
    // Echo the request body back so the test can inspect what went over
    // the wire.
    let endpoint = serve(Router::new().route(
        "/",
        post(|Json(payload): Json<Value>| async move {
            Json(json!({"response": payload.to_string()}))
        }),
    ))
    .await;

    let reply = client(endpoint).send_message("latest").await.unwrap();
    let seen: Value = serde_json::from_str(&reply).unwrap();

    assert_eq!(seen, json!({"message": "latest"}));
}

#[tokio::test]
async fn missing_response_field_substitutes_sentinel() {
    let endpoint = serve(Router::new().route("/", post(|| async { Json(json!({})) }))).await;

    let reply = client(endpoint).send_message("hi").await.unwrap();
    assert_eq!(reply, NO_RESPONSE_FALLBACK);
}

#[tokio::test]
async fn non_2xx_status_is_a_transport_error() {
    let endpoint = serve(Router::new().route(
        "/",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    ))
    .await;

    let err = client(endpoint).send_message("hi").await.unwrap_err();
    match err {
        InferenceError::Transport(msg) => assert!(msg.contains("502")),
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let endpoint = serve(Router::new().route("/", post(|| async { "not json" }))).await;

    let err = client(endpoint).send_message("hi").await.unwrap_err();
    assert!(matches!(err, InferenceError::ResponseParse(_)));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind then immediately drop a listener so the port is known-closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}/"))
        .send_message("hi")
        .await
        .unwrap_err();
    assert!(matches!(err, InferenceError::Transport(_)));
}
