//! Volume offline service call.

use reqwest::Method;
use tracing::info;

use crate::asset::Asset;
use crate::config::{Environment, ENDPOINT_VOLUME_OFFLINE};
use crate::error::Result;
use crate::models::{VolumeOfflineOutput, VolumeOfflineParams};
use crate::services::request::{execute, Payload};
use crate::url::build_base_url;

/// Take a volume offline. The response record is service-defined and passed
/// through unmodified.
pub async fn volume_offline_api(
    params: &VolumeOfflineParams,
    asset: &Asset,
    env: &Environment,
    token: &str,
) -> Result<VolumeOfflineOutput> {
    info!(
        "volume_offline_api: Taking volume offline: {}",
        params.volume_id
    );

    let url = format!("{}{}", build_base_url(asset, env)?, ENDPOINT_VOLUME_OFFLINE);
    let body = serde_json::to_value(params)?;
    let output: VolumeOfflineOutput =
        execute(env, Method::POST, &url, token, Payload::Json(body)).await?;

    info!(
        "volume_offline_api: Volume {} offline request accepted",
        params.volume_id
    );

    Ok(output)
}
