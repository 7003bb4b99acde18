//! IP enrichment service call.

use reqwest::Method;
use tracing::info;

use crate::asset::Asset;
use crate::config::{Environment, ENDPOINT_ENRICH_IP};
use crate::error::Result;
use crate::models::{EnrichIpOutput, EnrichIpParams, JobItem};
use crate::services::request::{execute, Payload};
use crate::url::build_base_url;

/// Call the IP enrichment endpoint. The response is a bare list of jobs,
/// preserved in server order.
pub async fn enrich_ip_api(
    params: &EnrichIpParams,
    asset: &Asset,
    env: &Environment,
    token: &str,
) -> Result<EnrichIpOutput> {
    info!("enrich_ip_api: Enriching IP address: {}", params.ip_address);

    let url = format!("{}{}", build_base_url(asset, env)?, ENDPOINT_ENRICH_IP);
    let body = serde_json::to_value(params)?;
    let jobs: Vec<JobItem> = execute(env, Method::POST, &url, token, Payload::Json(body)).await?;

    info!(
        "enrich_ip_api: IP enrichment completed for {}, {} jobs",
        params.ip_address,
        jobs.len()
    );

    Ok(EnrichIpOutput { jobs })
}
