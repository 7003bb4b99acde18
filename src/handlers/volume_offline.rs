use tracing::{debug, error, info};

use crate::asset::Asset;
use crate::config::Environment;
use crate::error::ActionFailure;
use crate::models::{VolumeOfflineOutput, VolumeOfflineParams};
use crate::services::get_oauth_token;
use crate::services::volume_offline::volume_offline_api;
use crate::soar::SoarClient;
use crate::views::render_volume_offline;

/// Take a volume offline.
pub async fn volume_offline_handler(
    params: &VolumeOfflineParams,
    soar: &mut dyn SoarClient,
    asset: &Asset,
    env: &Environment,
) -> Result<VolumeOfflineOutput, ActionFailure> {
    info!(
        "volume_offline_handler: Taking volume offline: {}",
        params.volume_id
    );

    let result = async {
        let token = get_oauth_token(asset, env).await?;
        debug!("volume_offline_handler: OAuth token retrieved successfully");
        volume_offline_api(params, asset, env, &token).await
    }
    .await;

    match result {
        Ok(output) => {
            soar.set_summary(render_volume_offline(&output));
            soar.set_message(format!(
                "Volume '{}' taken offline successfully",
                params.volume_id
            ));
            Ok(output)
        }
        Err(e) => {
            let failure = ActionFailure::with_context("Failed to take volume offline", e);
            error!("volume_offline_handler: {}", failure);
            Err(failure)
        }
    }
}
