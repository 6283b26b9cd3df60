//! # Wire Payloads
//!
//! Request bodies and query strings sent to the secrets server, plus an
//! optional typed view over the envelope it returns.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body of `POST /secrets`.
#[derive(Debug, Serialize)]
pub struct CreateSecretPayload<'a> {
    pub secret_content: &'a str,
    pub password: &'a str,
}

/// Query string of `GET /secrets/{id}`.
#[derive(Debug, Serialize)]
pub struct RetrieveQuery<'a> {
    pub password: &'a str,
}

/// A stored secret as the server reports it on success.
///
/// The client itself never requires this shape; callers that want a typed
/// value opt in with [`SecretEnvelope::from_response`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretEnvelope {
    pub id: String,
    pub secret_content: String,
}

impl SecretEnvelope {
    /// Interprets a raw envelope as a stored secret.
    ///
    /// Fails when the server answered with something else, such as the bare
    /// "not found" string it sends for a missing or already-read secret.
    pub fn from_response(response: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(response)
    }
}
