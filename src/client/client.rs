//! # Secret Client
//!
//! Thin binding over the secrets server's two endpoints:
//! - `POST /secrets` stores a secret and returns the server's envelope
//! - `GET /secrets/{id}?password=...` fetches it back
//!
//! ## Behavior
//!
//! Every response body is parsed as JSON and returned unmodified, whatever the
//! HTTP status. The client performs no retries, sets no timeouts, keeps no
//! cache and holds no state besides the base URL and a pooled `reqwest`
//! client. Redirects are followed and no `Referer` header is ever sent.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use onetime_client::client::SecretClient;
//! use onetime_client::common::config::ClientConfig;
//!
//! let client = SecretClient::new(&ClientConfig::default())?;
//!
//! let created = client.create("launch codes", "hunter2").await?;
//! let id = created["id"].as_str().unwrap_or_default();
//!
//! let secret = client.retrieve(id, "hunter2").await?;
//! ```

use log::debug;
use reqwest::header::{ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Url;
use serde_json::Value;

use crate::client::error::ClientError;
use crate::client::payload::{CreateSecretPayload, RetrieveQuery};
use crate::common::config::ClientConfig;

/// Path segment of the secrets collection, relative to the base URL.
const SECRETS_SEGMENT: &str = "secrets";

/// Redirect hops followed before the request fails.
const MAX_REDIRECTS: usize = 10;

const JSON_CONTENT_TYPE: &str = "application/json";
const ACCEPT_ANY: &str = "*/*";
const COMPRESSED_ENCODINGS: &str = "gzip, deflate, br";

/// Client for a secret-sharing server.
///
/// Cloning is cheap and clones share one connection pool, so a single client
/// can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct SecretClient {
    /// Base URL the `secrets` collection is resolved against
    base_url: Url,
    /// Pooled HTTP client carrying the redirect and referrer policy
    http_client: reqwest::Client,
}

impl SecretClient {
    /// Creates a client for the server named in `config`.
    ///
    /// # Errors
    ///
    /// * [`ClientError::InvalidBaseUrl`] if the base URL does not parse or
    ///   cannot carry path segments (e.g. `mailto:` URLs)
    /// * [`ClientError::Network`] if the HTTP transport cannot be initialized
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let raw = &config.client.base_url;
        let base_url = Url::parse(raw).map_err(|e| ClientError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: raw.clone(),
                reason: "URL cannot carry path segments".to_string(),
            });
        }

        let http_client = reqwest::Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .referer(false)
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Stores a secret protected by `password`.
    ///
    /// Sends `POST /secrets` with body `{"secret_content", "password"}` and
    /// returns the decoded response body as-is. Each call creates a distinct
    /// secret on the server.
    ///
    /// # Errors
    ///
    /// * [`ClientError::Network`] if the request fails in transport
    /// * [`ClientError::Decode`] if the response body is not JSON
    pub async fn create(&self, content: &str, password: &str) -> Result<Value, ClientError> {
        let url = self.secrets_url(None);
        let payload = CreateSecretPayload {
            secret_content: content,
            password,
        };

        debug!("POST {}", url.path());

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, ACCEPT_ANY)
            .header(ACCEPT_ENCODING, COMPRESSED_ENCODINGS)
            .json(&payload)
            .send()
            .await?;

        decode_envelope(response).await
    }

    /// Fetches the secret `id`, presenting `password` as a query parameter.
    ///
    /// Sends `GET /secrets/{id}?password=...` and returns the decoded response
    /// body as-is. The id is percent-encoded as a single path segment.
    ///
    /// # Errors
    ///
    /// * [`ClientError::Network`] if the request fails in transport
    /// * [`ClientError::Decode`] if the response body is not JSON
    pub async fn retrieve(&self, id: &str, password: &str) -> Result<Value, ClientError> {
        let url = self.secrets_url(Some(id));

        debug!("GET {}", url.path());

        let response = self
            .http_client
            .get(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .query(&RetrieveQuery { password })
            .send()
            .await?;

        decode_envelope(response).await
    }

    /// Resolves `secrets` (and optionally `secrets/{id}`) under the base URL,
    /// keeping any path prefix the base URL already has.
    fn secrets_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();

        // Always Ok: cannot-be-a-base URLs are rejected in `new`.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(SECRETS_SEGMENT);
            if let Some(id) = id {
                segments.push(id);
            }
        }

        url
    }
}

/// Reads the whole body and parses it as JSON, ignoring the status code.
async fn decode_envelope(response: reqwest::Response) -> Result<Value, ClientError> {
    debug!("{} from {}", response.status(), response.url().path());

    let body = response.bytes().await?;
    let envelope = serde_json::from_slice(&body)?;

    Ok(envelope)
}
