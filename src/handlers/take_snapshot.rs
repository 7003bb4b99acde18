use tracing::{debug, error, info};

use crate::asset::Asset;
use crate::config::Environment;
use crate::error::ActionFailure;
use crate::models::{TakeSnapshotOutput, TakeSnapshotParams};
use crate::services::get_oauth_token;
use crate::services::take_snapshot::take_snapshot_api;
use crate::soar::SoarClient;
use crate::views::render_take_snapshot;

/// Take a snapshot of a volume.
pub async fn take_snapshot_handler(
    params: &TakeSnapshotParams,
    soar: &mut dyn SoarClient,
    asset: &Asset,
    env: &Environment,
) -> Result<TakeSnapshotOutput, ActionFailure> {
    info!(
        "take_snapshot_handler: Taking snapshot of volume: {}",
        params.volume_id
    );

    let result = async {
        let token = get_oauth_token(asset, env).await?;
        debug!("take_snapshot_handler: OAuth token retrieved successfully");
        take_snapshot_api(params, asset, env, &token).await
    }
    .await;

    match result {
        Ok(output) => {
            soar.set_summary(render_take_snapshot(&output));
            soar.set_message(format!(
                "Snapshot for volume '{}' taken successfully",
                params.volume_id
            ));
            Ok(output)
        }
        Err(e) => {
            let failure = ActionFailure::with_context("Failed to take snapshot", e);
            error!("take_snapshot_handler: {}", failure);
            Err(failure)
        }
    }
}
