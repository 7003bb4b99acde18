//! Job status service call.

use reqwest::Method;
use tracing::info;

use crate::asset::Asset;
use crate::config::{Environment, ENDPOINT_JOB_STATUS};
use crate::error::Result;
use crate::models::{JobStatusOutput, JobStatusParams};
use crate::services::request::{execute, Payload};
use crate::url::build_base_url;

/// Fetch the status of an enrichment job by its id.
pub async fn get_job_status_api(
    params: &JobStatusParams,
    asset: &Asset,
    env: &Environment,
    token: &str,
) -> Result<JobStatusOutput> {
    info!(
        "get_job_status: Checking status for job_id: {}",
        params.job_id
    );

    let url = format!("{}{}", build_base_url(asset, env)?, ENDPOINT_JOB_STATUS);
    let query = vec![("job_id", params.job_id.clone())];
    let output: JobStatusOutput =
        execute(env, Method::GET, &url, token, Payload::Query(query)).await?;

    info!(
        "get_job_status: Job {} status: {}",
        params.job_id, output.status
    );

    Ok(output)
}
