use super::*;
use ecl_ir::Position;
use pretty_assertions::assert_eq;

fn msg(severity: Severity, code: ErrorCode) -> Message {
    Message::new(severity, code, Position::default(), "m")
}

#[test]
fn captures_in_order() {
    let mut queue = DiagnosticQueue::new();
    queue.report(msg(Severity::Error, ErrorCode::InvalidNumber));
    queue.report(msg(Severity::Warning, ErrorCode::NotAllowed));
    queue.report(msg(Severity::Fatal, ErrorCode::InvalidCharacter));
    assert_eq!(
        queue.codes(),
        vec![
            ErrorCode::InvalidNumber,
            ErrorCode::NotAllowed,
            ErrorCode::InvalidCharacter
        ]
    );
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.warning_count(), 1);
}

#[test]
fn off_is_dropped() {
    let mut queue = DiagnosticQueue::new();
    queue.report(msg(Severity::Off, ErrorCode::InvalidNumber));
    assert!(queue.is_empty());
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn info_is_not_counted() {
    let mut queue = DiagnosticQueue::new();
    queue.report(msg(Severity::Info, ErrorCode::InvalidNumber));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.error_count(), 0);
    assert_eq!(queue.warning_count(), 0);
}

#[test]
fn drain_empties() {
    let mut queue = DiagnosticQueue::new();
    queue.report(msg(Severity::Error, ErrorCode::InvalidNumber));
    let drained = queue.drain();
    assert_eq!(drained.len(), 1);
    assert!(queue.is_empty());
}

#[test]
fn reports_through_mut_reference() {
    fn report_twice(mut sink: impl DiagnosticSink) {
        sink.report(msg(Severity::Error, ErrorCode::InvalidNumber));
        sink.report(msg(Severity::Error, ErrorCode::InvalidNumber));
    }

    let mut queue = DiagnosticQueue::new();
    report_twice(&mut queue);
    assert_eq!(queue.error_count(), 2);
}
