use tracing::{debug, error, info};

use crate::asset::Asset;
use crate::config::Environment;
use crate::error::ActionFailure;
use crate::models::{EnrichIpOutput, EnrichIpParams};
use crate::services::enrich_ip::enrich_ip_api;
use crate::services::get_oauth_token;
use crate::soar::SoarClient;
use crate::views::render_enrich_ip_jobs;

/// Enrich an IP address with additional information.
pub async fn enrich_ip_address_handler(
    params: &EnrichIpParams,
    soar: &mut dyn SoarClient,
    asset: &Asset,
    env: &Environment,
) -> Result<EnrichIpOutput, ActionFailure> {
    debug!(
        "enrich_ip_address_handler: IP Address: {}",
        params.ip_address
    );

    let result = async {
        let token = get_oauth_token(asset, env).await?;
        debug!("enrich_ip_address_handler: OAuth token retrieved successfully");
        enrich_ip_api(params, asset, env, &token).await
    }
    .await;

    match result {
        Ok(output) => {
            soar.set_summary(render_enrich_ip_jobs(&output));
            soar.set_message(format!(
                "IP address '{}' enriched successfully",
                params.ip_address
            ));
            info!(
                "enrich_ip_address_handler: IP enrichment completed for {}",
                params.ip_address
            );
            Ok(output)
        }
        Err(e) => {
            let failure = ActionFailure::with_context("Failed to enrich IP address", e);
            error!("enrich_ip_address_handler: {}", failure);
            Err(failure)
        }
    }
}
