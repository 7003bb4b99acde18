use serde_json::Value;
use tracing::info;

use crate::models::EnrichStorageOutput;

/// Flatten storage enrichment results for template rendering.
pub fn render_enrich_storage(output: &EnrichStorageOutput) -> Value {
    info!(
        "render_enrich_storage: Processing output with {} volumes",
        output.volumes.len()
    );
    serde_json::to_value(output).unwrap_or(Value::Null)
}
