//! OAuth client-credentials token acquisition.

use serde::Deserialize;
use tracing::{debug, info};

use crate::asset::Asset;
use crate::config::{Environment, OAUTH_GRANT_TYPE};
use crate::error::{AppError, Result};
use crate::services::request::http_client;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange client credentials for a bearer token.
///
/// One form-encoded POST to the token endpoint per call; tokens are never
/// cached, every action invocation fetches a fresh one. Any transport error,
/// non-2xx response or malformed payload surfaces as
/// [`AppError::Authentication`].
pub async fn get_oauth_token(asset: &Asset, env: &Environment) -> Result<String> {
    if asset.client_id.trim().is_empty() || asset.client_secret.trim().is_empty() {
        return Err(AppError::Configuration(
            "client_id and client_secret must be set".to_string(),
        ));
    }

    info!("get_oauth_token: Retrieving OAuth token using client credentials flow");

    let form = [
        ("grant_type", OAUTH_GRANT_TYPE),
        ("audience", env.audience.as_str()),
        ("client_id", asset.client_id.as_str()),
        ("client_secret", asset.client_secret.as_str()),
    ];

    let client = http_client(env)?;
    let response = client
        .post(&env.oauth_url)
        .form(&form)
        .send()
        .await
        .map_err(|e| AppError::Authentication(format!("token endpoint unreachable: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Authentication(format!(
            "token endpoint returned {} - {}",
            status.as_u16(),
            body
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| AppError::Authentication(format!("malformed token payload: {}", e)))?;

    if token.access_token.is_empty() {
        return Err(AppError::Authentication(
            "token payload contained an empty access token".to_string(),
        ));
    }

    debug!("get_oauth_token: Successfully retrieved OAuth token");

    Ok(token.access_token)
}
