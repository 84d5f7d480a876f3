//! # gridlink-http
//!
//! HTTP transport for the gviz reporting endpoint.
//!
//! The endpoint wraps its JSON in a JSONP shim,
//! `google.visualization.Query.setResponse({...});`, which is unwrapped
//! here before deserialization. Supports HTTP/2 via ALPN negotiation
//! with fallback to HTTP/1.1.

use gridlink_core::{GridError, GridResult};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Opening of the JSONP call wrapping the response JSON.
const JSONP_CALL: &str = "setResponse(";

/// HTTP client for the reporting endpoint.
pub struct GvizClient {
    client: Client,
}

impl GvizClient {
    /// Constructs a new `GvizClient` configured to negotiate HTTP/2 via ALPN.
    ///
    /// The created client uses a 30-second default timeout and is configured
    /// to bypass system proxy lookup.
    ///
    /// # Errors
    ///
    /// Returns a `GridError::Http` if building the underlying HTTP client fails.
    pub fn new() -> GridResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            // Disable system proxy lookup to avoid macOS system-configuration issues
            .no_proxy()
            .build()
            .map_err(|e| GridError::Http(e.to_string()))?;

        Ok(Self { client })
    }

    /// Constructs a `GvizClient` with a custom per-request timeout in seconds.
    ///
    /// # Errors
    ///
    /// Returns `GridError::Http` if building the underlying HTTP client fails.
    pub fn with_timeout(timeout_secs: u64) -> GridResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .no_proxy()
            .build()
            .map_err(|e| GridError::Http(e.to_string()))?;

        Ok(Self { client })
    }

    /// Execute a query against a reporting endpoint.
    ///
    /// Attaches `Authorization: Bearer <token>` when a token is given;
    /// anonymous requests work for public sheets.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the response cannot be parsed,
    /// or the endpoint reports a query error.
    pub async fn execute(&self, url: &Url, token: Option<&str>) -> GridResult<QueryResults> {
        tracing::debug!(%url, "executing gviz query");

        let mut request = self.client.get(url.clone());
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GridError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GridError::Http(format!(
                "HTTP {} - {}",
                response.status(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GridError::Http(e.to_string()))?;

        let results: QueryResults = serde_json::from_str(extract_json(&body)?)?;
        if results.status == "error" {
            return Err(GridError::Query(results.error_message()));
        }

        Ok(results)
    }

    /// Execute queries against multiple endpoints concurrently.
    ///
    /// # Errors
    ///
    /// Returns error if any query fails.
    pub async fn execute_all(
        &self,
        urls: &[Url],
        token: Option<&str>,
    ) -> GridResult<Vec<QueryResults>> {
        let futures: Vec<_> = urls.iter().map(|url| self.execute(url, token)).collect();

        let results = futures::future::join_all(futures).await;

        results.into_iter().collect()
    }
}

impl Default for GvizClient {
    fn default() -> Self {
        Self::new().expect("Failed to create HTTP client")
    }
}

/// Slice the JSON object out of the JSONP shim.
///
/// Bodies that are already plain JSON pass through untouched.
fn extract_json(body: &str) -> GridResult<&str> {
    let Some(call) = body.find(JSONP_CALL) else {
        return Ok(body);
    };

    let start = call + JSONP_CALL.len();
    let end = body.rfind(')').filter(|&end| end >= start).ok_or_else(|| {
        GridError::http("Unterminated gviz payload")
    })?;

    Ok(&body[start..end])
}

/// Minimal model of a gviz query response.
///
/// Only the parts the adapter consumes; the full schema belongs to the
/// reporting API.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResults {
    pub status: String,
    #[serde(default)]
    pub errors: Vec<QueryError>,
    pub table: Option<QueryTable>,
}

impl QueryResults {
    /// Error message from an error response, one detail per error.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.errors
            .iter()
            .map(|error| error.detailed_message.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// One error entry in an error response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryError {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub detailed_message: String,
}

/// The tabular payload of a successful response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryTable {
    pub cols: Vec<QueryColumn>,
    #[serde(default)]
    pub rows: Vec<QueryRow>,
}

/// Column descriptor; `kind` is the reported column kind token.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryColumn {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One row; absent cells come through as `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRow {
    #[serde(default)]
    pub c: Vec<Option<QueryCell>>,
}

/// One cell: raw value plus the sheet's formatted rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryCell {
    #[serde(default)]
    pub v: serde_json::Value,
    #[serde(default)]
    pub f: Option<String>,
}
