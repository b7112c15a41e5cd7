//! Generic call interception
//!
//! [`Interceptor::invoke`] applies the begin / run / end-or-error /
//! propagate sequence to any closure, so call sites never repeat it by
//! hand. [`Traced`] layers that onto a held implementation as a static
//! proxy: the wrapper owns the target and forwards calls through
//! `invoke`, with no runtime code generation.

use crate::context::TraceContext;
use crate::policy::TracePolicy;
use crate::recorder::TraceRecorder;

/// Wraps arbitrary operations in a begin/end/exception trace pair
#[derive(Debug, Default, Clone)]
pub struct Interceptor {
    recorder: TraceRecorder,
    policy: TracePolicy,
}

impl Interceptor {
    /// Interceptor tracing every invocation
    pub fn new(recorder: TraceRecorder) -> Self {
        Self {
            recorder,
            policy: TracePolicy::trace_all(),
        }
    }

    /// Interceptor tracing only invocations selected by the policy
    pub fn with_policy(recorder: TraceRecorder, policy: TracePolicy) -> Self {
        Self { recorder, policy }
    }

    /// The recorder used for begin/end/error events
    pub fn recorder(&self) -> &TraceRecorder {
        &self.recorder
    }

    /// Run one operation under tracing
    ///
    /// Exactly one of end/error is logged per traced invocation, and the
    /// operation's value or error reaches the caller unmodified; the
    /// interceptor is transparent apart from the log side effect. If the
    /// policy rejects `message` the operation runs untraced.
    pub fn invoke<R, E, F>(&self, message: &str, op: F) -> Result<R, E>
    where
        F: FnOnce() -> Result<R, E>,
        E: std::fmt::Display,
    {
        if !self.policy.matches(message) {
            return op();
        }

        let status = self.recorder.begin(message);
        // If op unwinds, the guard still restores the context depth.
        let guard = DepthGuard::armed();
        let result = op();
        guard.disarm();

        match result {
            Ok(value) => {
                self.recorder.end(status);
                Ok(value)
            }
            Err(err) => {
                self.recorder.error(status, &err);
                Err(err)
            }
        }
    }
}

/// Pops one context frame on unwind so a panicking operation cannot leak
/// trace depth into unrelated later calls on the same thread.
struct DepthGuard {
    armed: bool,
}

impl DepthGuard {
    fn armed() -> Self {
        Self { armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        if self.armed {
            TraceContext::pop();
        }
    }
}

/// Static tracing proxy around a held implementation
///
/// Holds the wrapped value and an interceptor; every [`call`](Self::call)
/// goes through [`Interceptor::invoke`]. One generic type replaces
/// per-interface proxy classes.
#[derive(Debug, Clone)]
pub struct Traced<T> {
    inner: T,
    interceptor: Interceptor,
}

impl<T> Traced<T> {
    /// Wrap a value, tracing every call
    pub fn new(inner: T, recorder: TraceRecorder) -> Self {
        Self {
            inner,
            interceptor: Interceptor::new(recorder),
        }
    }

    /// Wrap a value, tracing calls selected by the policy
    pub fn with_policy(inner: T, recorder: TraceRecorder, policy: TracePolicy) -> Self {
        Self {
            inner,
            interceptor: Interceptor::with_policy(recorder, policy),
        }
    }

    /// Invoke an operation on the wrapped value under tracing
    pub fn call<R, E, F>(&self, message: &str, f: F) -> Result<R, E>
    where
        F: FnOnce(&T) -> Result<R, E>,
        E: std::fmt::Display,
    {
        self.interceptor.invoke(message, || f(&self.inner))
    }

    /// Access the wrapped value without tracing
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Unwrap, discarding the proxy
    pub fn into_inner(self) -> T {
        self.inner
    }
}
