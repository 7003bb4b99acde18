use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters for the volume offline action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeOfflineParams {
    /// UUID of the volume to take offline.
    pub volume_id: String,
    pub agent_id: String,
    pub system_id: String,
}

/// Output of the volume offline action.
///
/// Service-defined record passed through from the response body; `job_id` is
/// surfaced on its own because the offline operation runs as a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeOfflineOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(flatten)]
    pub record: Map<String, Value>,
}
