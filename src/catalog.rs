//! CID-10 catalog records and the remote provider
//!
//! The catalog is served as one JSON array at `{base_url}/cids`; the whole
//! record set is fetched in a single round trip. Record order is the server's
//! and codes are not guaranteed unique.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// One CID-10 catalog entry as served by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cid {
    /// Category code, e.g. "A00"
    #[serde(rename = "SUBCAT")]
    pub code: String,
    /// Free-text description of the condition
    #[serde(rename = "DESCRICAO")]
    pub description: String,
}

/// Read-only source of the full record set
pub trait CidProvider: Send + Sync {
    /// Fetch every record in one round trip
    fn list_all(&self) -> Result<Vec<Cid>, FetchError>;
}

/// HTTP provider bound to `{base_url}/cids`
pub struct HttpCidProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpCidProvider {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Build the provider with a preconfigured blocking client
    pub fn new(base_url: &str) -> crate::error::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .user_agent(concat!("cidex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl CidProvider for HttpCidProvider {
    fn list_all(&self) -> Result<Vec<Cid>, FetchError> {
        let url = format!("{}/cids", self.base_url);
        log::info!(target: "CATALOG", "GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| transport_error(e, &self.base_url))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| transport_error(e, &self.base_url))?;

        let result = decode_response(status, &body);
        match &result {
            Ok(records) => {
                log::info!(target: "CATALOG", "fetched {} records", records.len())
            }
            Err(e) => log::warn!(target: "CATALOG", "fetch failed: {}", e),
        }
        result
    }
}

/// Map request-level failures: connect/timeout means the server is not
/// reachable, anything else falls back to the opaque server error
fn transport_error(err: reqwest::Error, base_url: &str) -> FetchError {
    log::warn!(target: "CATALOG", "request error: {}", err);
    if err.is_connect() || err.is_timeout() {
        FetchError::Unreachable(base_url.to_string())
    } else {
        FetchError::Server(None)
    }
}

/// Classify one HTTP exchange into records or the failure taxonomy
fn decode_response(status: StatusCode, body: &str) -> Result<Vec<Cid>, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Server(extract_server_message(body)));
    }

    // The contract is a bare JSON array; any other shape is malformed
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) if value.is_array() => {
            serde_json::from_value(value).map_err(|_| FetchError::MalformedResponse)
        }
        _ => Err(FetchError::MalformedResponse),
    }
}

/// Error payloads carry an optional `message` field, surfaced verbatim
fn extract_server_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
}
