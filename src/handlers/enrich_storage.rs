use tracing::{debug, error, info};

use crate::asset::Asset;
use crate::config::Environment;
use crate::error::ActionFailure;
use crate::models::{EnrichStorageOutput, EnrichStorageParams};
use crate::services::enrich_storage::enrich_storage_api;
use crate::services::get_oauth_token;
use crate::soar::SoarClient;
use crate::views::render_enrich_storage;

/// Enrich storage information for a given agent and system.
pub async fn enrich_storage_handler(
    params: &EnrichStorageParams,
    soar: &mut dyn SoarClient,
    asset: &Asset,
    env: &Environment,
) -> Result<EnrichStorageOutput, ActionFailure> {
    debug!(
        "enrich_storage_handler: agent_id: {}, system_id: {}",
        params.agent_id, params.system_id
    );

    let result = async {
        let token = get_oauth_token(asset, env).await?;
        debug!("enrich_storage_handler: OAuth token retrieved successfully");
        enrich_storage_api(params, asset, env, &token).await
    }
    .await;

    match result {
        Ok(output) => {
            soar.set_summary(render_enrich_storage(&output));
            soar.set_message(format!(
                "Storage enriched successfully for agent '{}' and system '{}'",
                params.agent_id, params.system_id
            ));
            info!(
                "enrich_storage_handler: Storage enrichment completed, found {} volumes",
                output.volumes.len()
            );
            Ok(output)
        }
        Err(e) => {
            let failure = ActionFailure::with_context("Failed to enrich storage", e);
            error!("enrich_storage_handler: {}", failure);
            Err(failure)
        }
    }
}
