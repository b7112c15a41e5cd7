//! Begin-time snapshot for one traced call

use crate::trace_id::TraceId;
use std::time::Instant;

/// Snapshot returned by `begin` and consumed by the matching `end`/`error`
///
/// Carries the TraceId active for the call, the monotonic start instant
/// used to compute elapsed time, and the human-readable call description.
/// Created once per begin; not reused.
#[derive(Debug, Clone)]
pub struct TraceStatus {
    trace_id: TraceId,
    started_at: Instant,
    message: String,
}

impl TraceStatus {
    /// Capture a snapshot at the current instant
    pub fn new(trace_id: TraceId, message: impl Into<String>) -> Self {
        Self {
            trace_id,
            started_at: Instant::now(),
            message: message.into(),
        }
    }

    /// The TraceId active for this call
    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }

    /// When the call began (monotonic)
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// The call description passed to begin
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Milliseconds elapsed since the call began
    pub fn elapsed_ms(&self) -> u128 {
        self.started_at.elapsed().as_millis()
    }
}
