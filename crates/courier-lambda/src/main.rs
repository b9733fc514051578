use std::env;
use std::time::Duration;

use lambda_http::{Error, Request, run, service_fn};
use tracing_subscriber::EnvFilter;

use courier_inference::client::InferenceClient;
use courier_lambda::handler;
use courier_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    // The upstream endpoint is an external dependency, never hardcoded.
    let endpoint = env::var("UPSTREAM_API_URL")
        .map_err(|_| eyre::eyre!("UPSTREAM_API_URL must be set"))?;

    let timeout = match env::var("UPSTREAM_TIMEOUT_SECS") {
        Ok(raw) => {
            let secs: u64 = raw
                .parse()
                .map_err(|e| eyre::eyre!("invalid UPSTREAM_TIMEOUT_SECS: {e}"))?;
            Some(Duration::from_secs(secs))
        }
        Err(_) => None,
    };

    let inference = InferenceClient::new(endpoint, timeout)?;
    let state = AppState { inference };

    run(service_fn(move |event: Request| {
        let state = state.clone();
        async move { Ok::<_, Error>(handler::handle(&state, event).await) }
    }))
    .await
    .map_err(|e| eyre::eyre!(e))
}
