//! courier-core
//!
//! Pure domain types for the Courier chat relay: the conversation
//! vocabulary exchanged between the web client and the forwarding Lambda.
//! No AWS or HTTP dependency lives here.

pub mod models;
