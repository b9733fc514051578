//! courier-inference
//!
//! HTTP client for the external inference endpoint the chat Lambda
//! forwards messages to.

pub mod client;
pub mod error;
