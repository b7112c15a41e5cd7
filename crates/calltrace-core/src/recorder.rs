//! Trace recorder: the begin/end/exception API
//!
//! `begin` derives (or creates) the TraceId for the call, activates it in
//! the thread's [`TraceContext`], and returns a [`TraceStatus`] that the
//! matching `end` or `error` consumes. Every event is emitted through
//! `tracing` with the canonical schema fields plus a human-readable line
//! whose indentation renders the nesting depth:
//!
//! ```text
//! [b2c9e1a4] OrderController.request()
//! [b2c9e1a4] |-->OrderService.order()
//! [b2c9e1a4] | |-->OrderRepository.save()
//! [b2c9e1a4] | |<--OrderRepository.save() time=12ms
//! [b2c9e1a4] |<--OrderService.order() time=14ms
//! [b2c9e1a4] OrderController.request() time=15ms
//! ```

use crate::context::TraceContext;
use calltrace_core_types::schema::{EVENT_BEGIN, EVENT_END, EVENT_EXCEPTION};
use calltrace_core_types::{TraceId, TraceStatus};

const BEGIN_GLYPH: &str = "|-->";
const END_GLYPH: &str = "|<--";
const EXCEPTION_GLYPH: &str = "|<X-";

/// Public begin/end/error surface of the tracer
///
/// Holds no state of its own; all call-stack state lives in
/// [`TraceContext`], so clones share behavior trivially.
#[derive(Debug, Default, Clone)]
pub struct TraceRecorder;

impl TraceRecorder {
    /// Start tracing one call
    ///
    /// Derives a child of the thread's current TraceId, or creates a root
    /// TraceId if no trace is active, pushes it, and logs the begin line.
    /// The returned status must be handed to exactly one of
    /// [`end`](Self::end) / [`error`](Self::error) before the call
    /// returns.
    pub fn begin(&self, message: impl Into<String>) -> TraceStatus {
        let trace_id = match TraceContext::current() {
            Some(current) => current.child(),
            None => TraceId::create(),
        };
        TraceContext::push(trace_id.clone());

        let status = TraceStatus::new(trace_id, message);
        let id = status.trace_id();
        tracing::info!(
            trace_id = id.id(),
            level = id.level(),
            event = EVENT_BEGIN,
            "[{}] {}{}",
            id.id(),
            indent(BEGIN_GLYPH, id.level()),
            status.message(),
        );
        status
    }

    /// Finish tracing one call that succeeded
    ///
    /// Logs the end line with elapsed time and pops the context. Passing
    /// `None` (no begin happened) logs a degenerate warning and touches
    /// nothing; it never panics.
    pub fn end(&self, status: impl Into<Option<TraceStatus>>) {
        match status.into() {
            Some(status) => self.complete(&status, None),
            None => degenerate(EVENT_END),
        }
    }

    /// Finish tracing one call that failed
    ///
    /// Logs the exception line with elapsed time and the error's display
    /// form, then pops the context exactly like [`end`](Self::end). The
    /// error itself is only observed, never consumed or altered, so the
    /// caller's failure path is unaffected. `None` is tolerated the same
    /// way as in `end` because this runs on a failure path and must not
    /// mask the original error.
    pub fn error(&self, status: impl Into<Option<TraceStatus>>, err: &dyn std::fmt::Display) {
        match status.into() {
            Some(status) => self.complete(&status, Some(err)),
            None => degenerate(EVENT_EXCEPTION),
        }
    }

    fn complete(&self, status: &TraceStatus, err: Option<&dyn std::fmt::Display>) {
        let id = status.trace_id();
        let elapsed = status.elapsed_ms() as u64;

        match err {
            None => tracing::info!(
                trace_id = id.id(),
                level = id.level(),
                event = EVENT_END,
                elapsed_ms = elapsed,
                "[{}] {}{} time={}ms",
                id.id(),
                indent(END_GLYPH, id.level()),
                status.message(),
                elapsed,
            ),
            Some(err) => tracing::error!(
                trace_id = id.id(),
                level = id.level(),
                event = EVENT_EXCEPTION,
                elapsed_ms = elapsed,
                err = %err,
                "[{}] {}{} time={}ms ex={}",
                id.id(),
                indent(EXCEPTION_GLYPH, id.level()),
                status.message(),
                elapsed,
                err,
            ),
        }

        match TraceContext::pop() {
            Some(popped) if popped == *id => {}
            Some(popped) => tracing::warn!(
                trace_id = id.id(),
                "trace context out of order: popped {} level {}, expected level {}",
                popped.id(),
                popped.level(),
                id.level(),
            ),
            None => tracing::warn!(
                trace_id = id.id(),
                "trace context already empty at end of {}",
                status.message(),
            ),
        }
    }
}

fn degenerate(event: &'static str) {
    tracing::warn!(event, "trace {} called without a status; ignoring", event);
}

/// Render the depth prefix: one segment per enclosing level, branch glyph
/// at the deepest level. Root calls get no prefix.
fn indent(glyph: &str, level: u32) -> String {
    let mut out = String::new();
    for i in 0..level {
        out.push_str(if i == level - 1 { glyph } else { "| " });
    }
    out
}
