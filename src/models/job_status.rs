use serde::{Deserialize, Serialize};

/// Parameters for the check job status action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusParams {
    /// Identifier of the job to check.
    pub job_id: String,
}

/// Individual record attached to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub system_id: String,
    pub ip_address: String,
    pub lif_type: String,
    pub scope: String,
    pub svm: String,
    pub agent_id: String,
}

/// Output of the check job status action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatusOutput {
    pub job_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub status: String,
    #[serde(default)]
    pub records: Vec<JobRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
