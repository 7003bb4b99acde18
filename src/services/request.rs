//! Parameterized request executor shared by every action's service call.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::Environment;
use crate::error::{AppError, Result};

/// How an action's parameters travel on the wire.
pub enum Payload {
    /// JSON request body (POST actions).
    Json(Value),
    /// Query-string pairs (GET actions).
    Query(Vec<(&'static str, String)>),
}

/// Build a one-shot HTTP client with the environment's timeout and TLS
/// policy. A fresh client per call keeps sockets scoped to the invocation.
pub fn http_client(env: &Environment) -> Result<Client> {
    Client::builder()
        .timeout(env.timeout)
        .danger_accept_invalid_certs(!env.verify_ssl)
        .build()
        .map_err(|e| AppError::Transport(e.to_string()))
}

/// Issue exactly one REST request and deserialize the JSON response.
///
/// Non-2xx → [`AppError::RemoteRejection`] with status code and body text;
/// transport-level failures → [`AppError::Transport`]; a body that does not
/// match `T` → [`AppError::Decode`]. No retries, no pagination.
pub async fn execute<T: DeserializeOwned>(
    env: &Environment,
    method: Method,
    url: &str,
    token: &str,
    payload: Payload,
) -> Result<T> {
    debug!("execute: {} {}", method, url);

    let client = http_client(env)?;
    let request = client
        .request(method, url)
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .header(CONTENT_TYPE, "application/json");

    let request = match payload {
        Payload::Json(body) => request.json(&body),
        Payload::Query(pairs) => request.query(&pairs),
    };

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::RemoteRejection {
            status: status.as_u16(),
            body,
        });
    }

    debug!("execute: response status {}", status);

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}
