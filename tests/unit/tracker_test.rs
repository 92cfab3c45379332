//! Tests for the request tracker

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::thread;

use mathpix_client::core::models::RequestId;
use mathpix_client::core::services::RequestTracker;

use crate::common::mocks::MockOperation;

#[test]
fn test_start_and_complete() {
    let tracker = RequestTracker::new();
    let id = RequestId::new();
    let op = MockOperation::new();

    tracker.start(id, op.clone());
    assert!(tracker.contains(id));
    assert_eq!(tracker.len(), 1);

    assert!(tracker.complete(id));
    assert!(tracker.is_empty());
    assert_eq!(op.cancel_count(), 0, "completion must not cancel");
}

#[test]
fn test_cancel_removes_and_cancels() {
    let tracker = RequestTracker::new();
    let id = RequestId::new();
    let op = MockOperation::new();

    tracker.start(id, op.clone());
    assert!(tracker.cancel(id));
    assert!(!tracker.contains(id));
    assert_eq!(op.cancel_count(), 1);
}

#[test]
fn test_cancel_after_complete_is_noop() {
    let tracker = RequestTracker::new();
    let id = RequestId::new();
    let op = MockOperation::new();

    tracker.start(id, op.clone());
    tracker.complete(id);

    assert!(!tracker.cancel(id));
    assert_eq!(op.cancel_count(), 0);
}

#[test]
fn test_cancel_unknown_id_is_noop() {
    let tracker: RequestTracker<MockOperation> = RequestTracker::new();
    assert!(!tracker.cancel(RequestId::new()));
    assert!(!tracker.complete(RequestId::new()));
}

#[test]
fn test_cancel_all_cancels_every_operation() {
    let tracker = RequestTracker::new();
    let ops: Vec<MockOperation> = (0..5).map(|_| MockOperation::new()).collect();
    for op in &ops {
        tracker.start(RequestId::new(), op.clone());
    }

    assert_eq!(tracker.cancel_all(), 5);
    assert!(tracker.is_empty());
    for op in &ops {
        assert_eq!(op.cancel_count(), 1);
    }
    assert_eq!(tracker.cancel_all(), 0);
}

#[test]
fn test_start_same_id_cancels_displaced_operation() {
    let tracker = RequestTracker::new();
    let id = RequestId::new();
    let first = MockOperation::new();
    let second = MockOperation::new();

    tracker.start(id, first.clone());
    tracker.start(id, second.clone());

    assert_eq!(tracker.len(), 1);
    assert_eq!(first.cancel_count(), 1);
    assert_eq!(second.cancel_count(), 0);
}

#[test]
fn test_concurrent_cancel_and_complete_cancel_at_most_once() {
    for _ in 0..50 {
        let tracker = Arc::new(RequestTracker::new());
        let id = RequestId::new();
        let op = MockOperation::new();
        let counter = op.counter();
        tracker.start(id, op);

        let canceller = {
            let tracker = Arc::clone(&tracker);
            thread::spawn(move || tracker.cancel(id))
        };
        let completer = {
            let tracker = Arc::clone(&tracker);
            thread::spawn(move || tracker.complete(id))
        };
        let cancelled = canceller.join().unwrap();
        let completed = completer.join().unwrap();

        assert!(cancelled ^ completed, "exactly one side should win the entry");
        assert_eq!(counter.load(Ordering::SeqCst), usize::from(cancelled));
        assert!(tracker.is_empty());
    }
}

#[test]
fn test_request_ids_are_unique() {
    let a = RequestId::new();
    let b = RequestId::new();
    assert_ne!(a, b);
    assert_ne!(a.to_string(), b.to_string());
}
