//! # Client Components
//!
//! ## Secret Client ([`client`])
//! Sends the create and retrieve requests and hands back the server's JSON
//! envelope unmodified.
//!
//! ## Wire Payloads ([`payload`])
//! Request body and query types, plus an opt-in typed view of the envelope.
//!
//! ## Errors ([`error`])
//! Transport and decoding failures surfaced by the client.

pub mod client;
pub mod error;
pub mod payload;

// Re-export for convenience
pub use client::SecretClient;
pub use error::ClientError;
pub use payload::SecretEnvelope;
