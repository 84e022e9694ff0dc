//! Tests for the ordered multi-event checker

use eventchecker::core::models::{
    CheckError, ConversionError, GetEventsResponse, IncompleteSequenceError, Step,
};
use eventchecker::core::services::{MultiEventChecker, OrderedEventChecker};
use log::Level;
use serde_json::json;

use crate::common::{Recorder, checks, event, named, response};

// =============================================================================
// Stepping
// =============================================================================

#[test]
fn test_matches_in_order() {
    let mut checker = OrderedEventChecker::new(checks(&["A", "B", "C"]));

    assert_eq!(checker.next_event_check(&event("A"), None), Step::Matched);
    assert_eq!(checker.next_event_check(&event("B"), None), Step::Matched);
    assert_eq!(checker.next_event_check(&event("C"), None), Step::Done);
    assert!(checker.final_check(None).is_ok());
}

#[test]
fn test_noise_between_matches_is_tolerated() {
    let mut checker = OrderedEventChecker::new(checks(&["A", "B"]));

    assert_eq!(checker.next_event_check(&event("A"), None), Step::Matched);
    let step = checker.next_event_check(&event("x"), None);
    assert!(matches!(step, Step::Mismatched(CheckError::Mismatch(_))));
    assert_eq!(checker.matched(), 1);
    assert_eq!(checker.next_event_check(&event("B"), None), Step::Done);
    assert!(checker.final_check(None).is_ok());
}

#[test]
fn test_out_of_order_does_not_match() {
    let mut checker = OrderedEventChecker::new(checks(&["A", "B"]));

    assert!(!checker.next_event_check(&event("B"), None).is_done());
    assert_eq!(checker.next_event_check(&event("A"), None), Step::Matched);

    let err = checker.final_check(None).unwrap_err();
    assert_eq!(
        err,
        CheckError::Incomplete(IncompleteSequenceError::Ordered {
            matched: 1,
            total: 2
        })
    );
    assert_eq!(err.to_string(), "OrderedEventChecker: only 1/2 matched");
}

#[test]
fn test_mismatch_carries_leaf_error() {
    let mut checker = OrderedEventChecker::new([named("A")]);

    let step = checker.next_event_check(&event("x"), None);
    let err = step.error().unwrap();
    assert_eq!(err.to_string(), r#"expected A, got Some("x")"#);
}

#[test]
fn test_done_after_completion() {
    let mut checker = OrderedEventChecker::new([named("A")]);

    assert_eq!(checker.next_event_check(&event("A"), None), Step::Done);
    // Feeding past the end keeps reporting done without failing
    assert_eq!(checker.next_event_check(&event("zzz"), None), Step::Done);
    assert!(checker.final_check(None).is_ok());
}

#[test]
fn test_empty_is_done_immediately() {
    let mut checker = OrderedEventChecker::default();

    assert!(checker.is_empty());
    assert_eq!(checker.next_event_check(&event("A"), None), Step::Done);
    assert!(checker.final_check(None).is_ok());
}

// =============================================================================
// Reset and Reuse
// =============================================================================

#[test]
fn test_final_check_resets_after_failure() {
    let mut checker = OrderedEventChecker::new(checks(&["A", "B"]));

    let _ = checker.next_event_check(&event("A"), None);
    assert!(checker.final_check(None).is_err());
    assert_eq!(checker.matched(), 0);

    assert_eq!(checker.next_event_check(&event("A"), None), Step::Matched);
    assert_eq!(checker.next_event_check(&event("B"), None), Step::Done);
    assert!(checker.final_check(None).is_ok());
}

#[test]
fn test_final_check_twice_without_events() {
    let mut checker = OrderedEventChecker::new([named("A")]);

    let first = checker.final_check(None);
    let second = checker.final_check(None);
    assert_eq!(first, second);
    assert!(first.is_err());
}

#[test]
fn test_added_checks_go_to_the_tail() {
    let mut checker = OrderedEventChecker::new([named("A")]);
    checker.add_checks([named("B")]);

    assert_eq!(checker.len(), 2);
    assert_eq!(checker.next_event_check(&event("A"), None), Step::Matched);
    assert_eq!(checker.next_event_check(&event("B"), None), Step::Done);
}

// =============================================================================
// Responses and Logging
// =============================================================================

#[test]
fn test_response_without_event_is_a_mismatch() {
    let mut checker = OrderedEventChecker::new([named("A")]);
    let control = GetEventsResponse::with_field("rate_limit_info", json!({}));

    let step = checker.next_response_check(&control, None);
    assert_eq!(
        step,
        Step::Mismatched(CheckError::Conversion(ConversionError::UnknownEvent(
            "rate_limit_info".to_string()
        )))
    );
    assert_eq!(checker.matched(), 0);

    assert_eq!(checker.next_response_check(&response("A"), None), Step::Done);
}

#[test]
fn test_logs_progress() {
    let recorder = Recorder::default();
    let mut checker = OrderedEventChecker::new(checks(&["A", "B"]));

    let _ = checker.next_event_check(&event("A"), Some(&recorder));
    let _ = checker.next_event_check(&event("x"), Some(&recorder));
    let _ = checker.next_event_check(&event("B"), Some(&recorder));

    assert_eq!(
        recorder.messages(),
        vec![
            "OrderedEventChecker: 1/2 matched",
            "OrderedEventChecker: all 2 checks matched",
        ]
    );
    assert!(recorder.levels().iter().all(|level| *level == Level::Info));
}

#[test]
fn test_logger_does_not_change_results() {
    let recorder = Recorder::default();
    let mut quiet = OrderedEventChecker::new(checks(&["A", "B"]));
    let mut loud = OrderedEventChecker::new(checks(&["A", "B"]));

    for id in ["x", "A", "y", "B"] {
        assert_eq!(
            quiet.next_event_check(&event(id), None),
            loud.next_event_check(&event(id), Some(&recorder))
        );
    }
    assert_eq!(quiet.final_check(None), loud.final_check(Some(&recorder)));
}

#[test]
fn test_works_behind_a_box() {
    let mut checker: Box<dyn MultiEventChecker> =
        Box::new(OrderedEventChecker::new([named("A")]));

    assert_eq!(checker.next_response_check(&response("A"), None), Step::Done);
    assert!(checker.final_check(None).is_ok());
}
