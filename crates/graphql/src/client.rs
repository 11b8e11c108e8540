//! Minimal GraphQL-over-HTTP client.

use crate::error::{GraphqlError, GraphqlResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<ErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Decode a GraphQL response body.
///
/// Any entry in `errors` fails the whole query, even when partial `data` is
/// present.
///
/// # Errors
///
/// Returns `GraphqlError::Decode` for malformed JSON or a `data` shape that does
/// not match `T`, `GraphqlError::Errors` when the server reported errors, and
/// `GraphqlError::MissingData` when `data` is absent or null.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> GraphqlResult<T> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(GraphqlError::Decode)?;

    if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
        return Err(GraphqlError::Errors(
            errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    envelope.data.ok_or(GraphqlError::MissingData)
}

/// Posts queries to one GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl GraphqlClient {
    /// Create a client for `endpoint`, sending `token` as a bearer token when set.
    ///
    /// # Errors
    ///
    /// Returns `GraphqlError::ClientBuild` if the HTTP client cannot be created.
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> GraphqlResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GraphqlError::ClientBuild)?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run `query` with `variables` and decode `data` into `T`.
    ///
    /// # Errors
    ///
    /// Returns `GraphqlError::Http` for transport failures, `GraphqlError::Status`
    /// for non-success HTTP statuses, and the errors of [`decode_response`].
    pub async fn query<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: Value,
    ) -> GraphqlResult<T> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let mut req = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        tracing::debug!(operation, endpoint = %self.endpoint, "GraphQL query");

        let resp = req.send().await.map_err(GraphqlError::Http)?;
        let status = resp.status();
        let text = resp.text().await.map_err(GraphqlError::Http)?;

        if !status.is_success() {
            return Err(GraphqlError::Status {
                status: status.as_u16(),
                body: truncate(&text, 512),
            });
        }

        decode_response(&text)
    }
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
