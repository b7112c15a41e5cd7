#![allow(clippy::unwrap_used, clippy::expect_used)]

use calltrace_core::test_capture::init_test_capture;
use calltrace_core::{TraceContext, TraceRecorder};
use calltrace_core_types::schema::{
    EVENT_BEGIN, EVENT_END, EVENT_EXCEPTION, FIELD_ELAPSED_MS,
};
use tracing::Level;

#[test]
fn test_begin_emits_begin_event_with_message() {
    let capture = init_test_capture();
    let recorder = TraceRecorder::default();

    let status = recorder.begin("test_begin_emits_unique_1");
    let trace_id = status.trace_id().id().to_string();
    recorder.end(status);

    capture.assert_event_exists(&trace_id, EVENT_BEGIN);

    let events = capture.events_for_trace(&trace_id);
    let begin = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_BEGIN))
        .expect("begin event present");
    let line = begin.message.as_deref().expect("begin line rendered");
    assert!(line.starts_with(&format!("[{}] ", trace_id)));
    assert!(line.contains("test_begin_emits_unique_1"));
}

#[test]
fn test_end_reports_elapsed_time() {
    let capture = init_test_capture();
    let recorder = TraceRecorder::default();

    let status = recorder.begin("test_end_elapsed_unique_2");
    let trace_id = status.trace_id().id().to_string();
    std::thread::sleep(std::time::Duration::from_millis(5));
    recorder.end(status);

    let events = capture.events_for_trace(&trace_id);
    let end = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .expect("end event present");

    let elapsed: u64 = end
        .fields
        .get(FIELD_ELAPSED_MS)
        .expect("elapsed_ms field present")
        .parse()
        .unwrap();
    assert!(elapsed >= 5, "elapsed {}ms should cover the sleep", elapsed);

    let line = end.message.as_deref().unwrap();
    assert!(line.contains("time="));
    assert!(line.ends_with("ms"));
}

#[test]
fn test_error_logs_exception_with_description() {
    let capture = init_test_capture();
    let recorder = TraceRecorder::default();

    let status = recorder.begin("test_error_unique_3");
    let trace_id = status.trace_id().id().to_string();
    recorder.error(status, &"disk full");

    let events = capture.events_for_trace(&trace_id);
    let exception = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_EXCEPTION))
        .expect("exception event present");

    assert_eq!(exception.level, Level::ERROR);
    let line = exception.message.as_deref().unwrap();
    assert!(line.contains("ex=disk full"));
    assert!(exception.fields.contains_key(FIELD_ELAPSED_MS));
}

#[test]
fn test_error_pops_like_end() {
    let recorder = TraceRecorder::default();
    let before = TraceContext::depth();

    let status = recorder.begin("test_error_pops_unique_4");
    recorder.error(status, &"boom");

    assert_eq!(TraceContext::depth(), before);
}

#[test]
fn test_nested_begin_lines_show_depth() {
    let capture = init_test_capture();
    let recorder = TraceRecorder::default();

    let outer = recorder.begin("outer_depth_unique_5");
    let trace_id = outer.trace_id().id().to_string();
    let inner = recorder.begin("inner_depth_unique_5");
    recorder.end(inner);
    recorder.end(outer);

    let events = capture.events_for_trace(&trace_id);
    let begin_lines: Vec<&str> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_BEGIN))
        .filter_map(|e| e.message.as_deref())
        .collect();
    assert_eq!(begin_lines.len(), 2);
    assert!(begin_lines[0].contains("] outer_depth_unique_5"));
    assert!(begin_lines[1].contains("] |-->inner_depth_unique_5"));

    let end_lines: Vec<&str> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .filter_map(|e| e.message.as_deref())
        .collect();
    assert!(end_lines[0].contains("] |<--inner_depth_unique_5"));
}

#[test]
fn test_end_without_status_is_degenerate_noop() {
    let capture = init_test_capture();
    let recorder = TraceRecorder::default();
    let before = TraceContext::depth();

    // No prior begin happened; the recorder must not crash.
    recorder.end(None);
    recorder.error(None, &"original failure stays untouched");

    assert_eq!(TraceContext::depth(), before);
    let warnings = capture.count_events(|e| {
        e.level == Level::WARN
            && e.message
                .as_deref()
                .is_some_and(|m| m.contains("without a status"))
    });
    assert!(warnings >= 2, "each degenerate call logs one warning");
}

#[test]
fn test_begin_end_pair_is_exactly_one_of_each() {
    let capture = init_test_capture();
    let recorder = TraceRecorder::default();

    let status = recorder.begin("test_pairing_unique_6");
    let trace_id = status.trace_id().id().to_string();
    recorder.end(status);

    let begins = capture.count_events(|e| {
        e.trace_id.as_deref() == Some(trace_id.as_str())
            && e.event.as_deref() == Some(EVENT_BEGIN)
    });
    let ends = capture.count_events(|e| {
        e.trace_id.as_deref() == Some(trace_id.as_str()) && e.event.as_deref() == Some(EVENT_END)
    });
    assert_eq!(begins, 1);
    assert_eq!(ends, 1);
}
