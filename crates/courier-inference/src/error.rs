use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("client construction failed: {0}")]
    Config(String),

    #[error("request to upstream endpoint failed: {0}")]
    Transport(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
