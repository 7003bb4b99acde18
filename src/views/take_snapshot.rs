use serde_json::Value;
use tracing::info;

use crate::models::TakeSnapshotOutput;

/// Flatten snapshot creation results for template rendering.
pub fn render_take_snapshot(output: &TakeSnapshotOutput) -> Value {
    info!("render_take_snapshot: Processing snapshot record");
    serde_json::to_value(output).unwrap_or(Value::Null)
}
