//! courier-lambda
//!
//! The API Gateway chat endpoint: forwards the latest user message to the
//! external inference endpoint and echoes the updated conversation history
//! back to the caller. Exposed as a library so integration tests can drive
//! the handler directly.

pub mod error;
pub mod handler;
pub mod response;
pub mod state;
