use serde_json::Value;
use tracing::info;

use crate::models::VolumeOfflineOutput;

/// Flatten volume offline results for template rendering.
pub fn render_volume_offline(output: &VolumeOfflineOutput) -> Value {
    info!(
        "render_volume_offline: Processing offline job {}",
        output.job_id.as_deref().unwrap_or("<none>")
    );
    serde_json::to_value(output).unwrap_or(Value::Null)
}
