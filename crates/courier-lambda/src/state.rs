use courier_inference::client::InferenceClient;

/// Shared application state, built once at startup and handed to every
/// invocation.
#[derive(Clone)]
pub struct AppState {
    pub inference: InferenceClient,
}
