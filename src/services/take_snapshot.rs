//! Take snapshot service call.

use reqwest::Method;
use tracing::info;

use crate::asset::Asset;
use crate::config::{Environment, ENDPOINT_TAKE_SNAPSHOT};
use crate::error::Result;
use crate::models::{TakeSnapshotOutput, TakeSnapshotParams};
use crate::services::request::{execute, Payload};
use crate::url::build_base_url;

/// Create a snapshot of a volume. The response record is service-defined and
/// passed through unmodified.
pub async fn take_snapshot_api(
    params: &TakeSnapshotParams,
    asset: &Asset,
    env: &Environment,
    token: &str,
) -> Result<TakeSnapshotOutput> {
    info!(
        "take_snapshot_api: Creating snapshot for volume: {}",
        params.volume_id
    );

    let url = format!("{}{}", build_base_url(asset, env)?, ENDPOINT_TAKE_SNAPSHOT);
    let body = serde_json::to_value(params)?;
    let output: TakeSnapshotOutput =
        execute(env, Method::POST, &url, token, Payload::Json(body)).await?;

    info!(
        "take_snapshot_api: Snapshot created for volume {}",
        params.volume_id
    );

    Ok(output)
}
