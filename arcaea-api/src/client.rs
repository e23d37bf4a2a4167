//! HTTP client for the Arcaea game-data API.
//!
//! Every endpoint is a plain GET against `{base_url}/{path}{query}`. JSON
//! endpoints respond with the `{status, message, content}` envelope (decoded
//! by the internal `envelope` module); asset endpoints respond with raw
//! image/audio bytes and signal failure only through the HTTP status.
//!
//! The client is stateless between calls: no caching, no retries, no shared
//! mutable state. Concurrent calls from multiple threads are fine; connection
//! reuse is whatever [`reqwest`] does on its own.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::envelope;
use crate::error::Result;
use crate::query::QueryBuilder;

const USER_AGENT: &str = concat!("arcaea-api/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for an Arcaea game-data service.
///
/// Holds a [`reqwest::blocking::Client`], the service base URL, and an
/// optional access token. API methods are implemented in separate modules
/// (`song`, `user`, `assets`, `misc`) as `impl ArcaeaClient` blocks.
pub struct ArcaeaClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ArcaeaClient {
    /// Create a client for a public (tokenless) service instance.
    ///
    /// `base_url` points at the API root, e.g.
    /// `https://server.example/botarcapi`; a trailing slash is tolerated.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::build(base_url, None)
    }

    /// Create a client that authenticates with a bearer token.
    ///
    /// Obtaining and storing the token is the caller's business; the client
    /// only forwards it as an `Authorization` header on every request.
    pub fn with_token(base_url: &str, token: &str) -> Result<Self> {
        Self::build(base_url, Some(token.to_owned()))
    }

    /// Create a client around a caller-configured [`reqwest`] client, for
    /// callers that need their own timeout, proxy, or TLS settings.
    pub fn with_http(http: Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
        }
    }

    fn build(base_url: &str, token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self::with_http(http, base_url, token))
    }

    /// Base URL this client talks to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str, query: &QueryBuilder) -> Result<Response> {
        let url = format!("{}/{}{}", self.base_url, path, query.build());
        let mut req = self.http.get(&url);
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        Ok(req.send()?)
    }

    /// GET a JSON endpoint and decode its envelope into `T`.
    ///
    /// The HTTP status is not checked first: the service reports failures
    /// through the envelope, and a body that is not a valid envelope maps to
    /// [`ArcaeaError::Malformed`](crate::ArcaeaError::Malformed) either way.
    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryBuilder,
    ) -> Result<T> {
        let body = self.get(path, query)?.bytes()?;
        envelope::decode(&body)
    }

    /// GET a binary asset endpoint and return the body byte-for-byte.
    ///
    /// Asset responses carry no envelope, so a non-2xx status is the only
    /// failure signal and maps to
    /// [`ArcaeaError::Http`](crate::ArcaeaError::Http).
    pub(crate) fn get_bytes(&self, path: &str, query: &QueryBuilder) -> Result<Vec<u8>> {
        let resp = self.get(path, query)?.error_for_status()?;
        Ok(resp.bytes()?.to_vec())
    }
}
