use serde_json::Value;
use tracing::info;

use crate::models::EnrichIpOutput;

/// Flatten IP enrichment job results for template rendering.
pub fn render_enrich_ip_jobs(output: &EnrichIpOutput) -> Value {
    info!(
        "render_enrich_ip_jobs: Processing output with {} jobs",
        output.jobs.len()
    );
    serde_json::to_value(output).unwrap_or(Value::Null)
}
