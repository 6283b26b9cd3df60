pub mod client;
pub mod common;

pub use client::{ClientError, SecretClient, SecretEnvelope};
pub use common::config::ClientConfig;
