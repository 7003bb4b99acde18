use tracing::{debug, error, info};

use crate::asset::Asset;
use crate::config::Environment;
use crate::error::ActionFailure;
use crate::models::{JobStatusOutput, JobStatusParams};
use crate::services::get_oauth_token;
use crate::services::job_status::get_job_status_api;
use crate::soar::SoarClient;

/// Check the status of an enrichment job.
pub async fn job_status_handler(
    params: &JobStatusParams,
    soar: &mut dyn SoarClient,
    asset: &Asset,
    env: &Environment,
) -> Result<JobStatusOutput, ActionFailure> {
    info!(
        "job_status_handler: Checking status for job_id: {}",
        params.job_id
    );

    let result = async {
        let token = get_oauth_token(asset, env).await?;
        debug!("job_status_handler: OAuth token retrieved successfully");
        get_job_status_api(params, asset, env, &token).await
    }
    .await;

    match result {
        Ok(output) => {
            soar.set_summary(serde_json::to_value(&output).unwrap_or(serde_json::Value::Null));
            soar.set_message(format!(
                "Job '{}' status retrieved successfully: {}",
                params.job_id, output.status
            ));
            info!(
                "job_status_handler: Job {} status: {}",
                params.job_id, output.status
            );
            Ok(output)
        }
        Err(e) => {
            let failure = ActionFailure::with_context("Failed to get job status", e);
            error!("job_status_handler: {}", failure);
            Err(failure)
        }
    }
}
