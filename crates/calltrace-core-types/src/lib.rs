//! Core types shared across the calltrace facilities
//!
//! This crate provides the foundational value types used by the trace
//! recorder and interceptor:
//!
//! - **TraceId**: identifier + nesting level for one call tree
//! - **TraceStatus**: begin-time snapshot consumed by end/error
//! - **Schema constants**: canonical field keys and event names

pub mod schema;
pub mod status;
pub mod trace_id;

pub use status::TraceStatus;
pub use trace_id::TraceId;
