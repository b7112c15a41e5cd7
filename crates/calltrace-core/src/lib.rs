//! calltrace-core - Single-process call tracing
//!
//! This crate wraps business operations so that a begin/end/exception
//! event pair is logged around every traced call, including:
//! - Per-call-tree trace identifiers with visually nested depth
//! - Elapsed-time measurement on the begin/end pair
//! - Thread-local trace context so concurrent call stacks never mix
//! - A generic interceptor (`invoke` / `Traced`) so call sites do not
//!   repeat the begin/try/end/error sequence by hand
//! - A pattern-based policy deciding which calls get traced
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```
//! use calltrace_core::{Interceptor, TraceRecorder};
//!
//! let interceptor = Interceptor::new(TraceRecorder::default());
//! let result: Result<u32, std::io::Error> =
//!     interceptor.invoke("OrderService.order()", || Ok(42));
//! assert_eq!(result.unwrap(), 42);
//! ```

pub mod context;
pub mod init;
pub mod interceptor;
pub mod policy;
pub mod recorder;
pub mod test_capture;

// Re-export commonly used types
pub use calltrace_core_types::{TraceId, TraceStatus};
pub use context::TraceContext;
pub use init::{init, Profile};
pub use interceptor::{Interceptor, Traced};
pub use policy::TracePolicy;
pub use recorder::TraceRecorder;
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
