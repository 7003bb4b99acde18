use tracing::{error, info};

use crate::asset::Asset;
use crate::config::Environment;
use crate::error::ActionFailure;
use crate::services::get_oauth_token;

/// Test connectivity by obtaining an OAuth token.
///
/// Degenerate action: succeeds iff a token can be acquired, no service call
/// is attempted.
pub async fn test_connectivity_handler(
    asset: &Asset,
    env: &Environment,
) -> Result<(), ActionFailure> {
    info!("test_connectivity_handler: Testing connectivity with OAuth authentication");

    match get_oauth_token(asset, env).await {
        Ok(_) => {
            info!("test_connectivity_handler: Connectivity test succeeded");
            Ok(())
        }
        Err(e) => {
            error!("test_connectivity_handler: {}", e);
            Err(ActionFailure::from(e))
        }
    }
}
