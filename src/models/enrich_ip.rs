use serde::{Deserialize, Serialize};

/// Parameters for the enrich IP address action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichIpParams {
    /// IP address to enrich.
    pub ip_address: String,
}

/// One enrichment job spawned for the IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobItem {
    /// Unique identifier for the job.
    pub job_id: String,
    /// Current status of the job (e.g. "queued", "running", "completed").
    pub status: String,
}

/// Output of the enrich IP address action.
///
/// The wire response is a bare list of jobs; it is wrapped under `jobs` here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichIpOutput {
    pub jobs: Vec<JobItem>,
}
