//! Storage enrichment service call.

use reqwest::Method;
use tracing::info;

use crate::asset::Asset;
use crate::config::{Environment, ENDPOINT_ENRICH_STORAGE};
use crate::error::Result;
use crate::models::{EnrichStorageOutput, EnrichStorageParams, VolumeInfo};
use crate::services::request::{execute, Payload};
use crate::url::build_base_url;

/// Call the storage enrichment endpoint. The response is a bare list of
/// volumes, preserved in server order.
pub async fn enrich_storage_api(
    params: &EnrichStorageParams,
    asset: &Asset,
    env: &Environment,
    token: &str,
) -> Result<EnrichStorageOutput> {
    info!(
        "enrich_storage_api: Enriching storage for agent_id: {}, system_id: {}",
        params.agent_id, params.system_id
    );

    let url = format!("{}{}", build_base_url(asset, env)?, ENDPOINT_ENRICH_STORAGE);
    let query = vec![
        ("agent_id", params.agent_id.clone()),
        ("system_id", params.system_id.clone()),
    ];
    let volumes: Vec<VolumeInfo> =
        execute(env, Method::GET, &url, token, Payload::Query(query)).await?;

    info!(
        "enrich_storage_api: Storage enrichment completed, found {} volumes",
        volumes.len()
    );

    Ok(EnrichStorageOutput { volumes })
}
