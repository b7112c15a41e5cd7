//! Canonical schema constants for structured trace events
//!
//! These constants keep field keys and event names consistent between the
//! recorder, the capture layer, and assertions in tests.

// Canonical field keys for structured logging
pub const FIELD_TRACE_ID: &str = "trace_id";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_ELAPSED_MS: &str = "elapsed_ms";
pub const FIELD_ERR: &str = "err";
// The rendered log line, under the field name `tracing` gives it
pub const FIELD_MESSAGE: &str = "message";

// Canonical event names
pub const EVENT_BEGIN: &str = "begin";
pub const EVENT_END: &str = "end";
pub const EVENT_EXCEPTION: &str = "exception";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_TRACE_ID.is_empty());
        assert!(!FIELD_EVENT.is_empty());
        assert!(!FIELD_MESSAGE.is_empty());
        assert!(!EVENT_BEGIN.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_EXCEPTION.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_BEGIN, EVENT_END);
        assert_ne!(EVENT_BEGIN, EVENT_EXCEPTION);
        assert_ne!(EVENT_END, EVENT_EXCEPTION);
    }
}
