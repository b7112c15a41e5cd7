//! Thread-local trace context
//!
//! Tracks the TraceId stack for the current thread so that nested begins
//! share one identifier while unrelated threads never observe each
//! other's state. The storage is a per-thread stack, not a shared global;
//! isolation is structural and needs no locking.

use calltrace_core_types::TraceId;
use std::cell::RefCell;

thread_local! {
    static STACK: RefCell<Vec<TraceId>> = const { RefCell::new(Vec::new()) };
}

/// Accessor for the current thread's trace stack
///
/// Empty at call-stack start; `push` on begin, `pop` on the matching
/// end/error. When the root frame pops the context is empty again.
pub struct TraceContext;

impl TraceContext {
    /// The TraceId active for the current thread, or None outside a trace
    pub fn current() -> Option<TraceId> {
        STACK.with(|s| s.borrow().last().cloned())
    }

    /// Activate a TraceId for the current thread (called at begin)
    pub fn push(trace_id: TraceId) {
        STACK.with(|s| s.borrow_mut().push(trace_id));
    }

    /// Deactivate the innermost TraceId, restoring its parent
    ///
    /// Returns the popped id, or None if no trace is active. Popping an
    /// empty context is a no-op so an unmatched end never panics.
    pub fn pop() -> Option<TraceId> {
        STACK.with(|s| s.borrow_mut().pop())
    }

    /// Current nesting depth of the thread's trace stack
    pub fn depth() -> usize {
        STACK.with(|s| s.borrow().len())
    }
}
