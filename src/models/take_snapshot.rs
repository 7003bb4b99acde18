use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters for the take snapshot action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeSnapshotParams {
    /// UUID of the volume to snapshot.
    pub volume_id: String,
    pub agent_id: String,
    pub system_id: String,
}

/// Output of the take snapshot action.
///
/// The service defines this record; it is passed through unmodified from the
/// JSON response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TakeSnapshotOutput {
    #[serde(flatten)]
    pub record: Map<String, Value>,
}
