//! Seam towards the host SOAR platform.

use serde_json::Value;

/// Reporting surface the host platform hands to every action handler.
///
/// Summaries are only set on the success path; a failed action reports its
/// failure message through [`crate::error::ActionFailure`] instead.
pub trait SoarClient {
    fn set_summary(&mut self, summary: Value);
    fn set_message(&mut self, message: String);
}

/// In-memory [`SoarClient`] capturing what an action reported.
///
/// Used by the CLI glue and by tests; the real platform supplies its own
/// implementation.
#[derive(Debug, Default)]
pub struct ActionReport {
    pub summary: Option<Value>,
    pub message: Option<String>,
}

impl SoarClient for ActionReport {
    fn set_summary(&mut self, summary: Value) {
        self.summary = Some(summary);
    }

    fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }
}
