use serde::{Deserialize, Serialize};

/// Parameters for the enrich storage action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichStorageParams {
    pub agent_id: String,
    pub system_id: String,
}

/// Individual volume information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeInfo {
    pub volume_uuid: String,
    pub volume_name: String,
    pub svm_name: String,
}

/// Output of the enrich storage action.
///
/// The wire response is a bare list of volumes; it is wrapped under
/// `volumes` here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichStorageOutput {
    #[serde(default)]
    pub volumes: Vec<VolumeInfo>,
}
