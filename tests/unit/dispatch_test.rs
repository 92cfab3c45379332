//! Tests for callback dispatchers

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use mathpix_client::adapters::dispatch::{InlineDispatcher, MainQueue};
use mathpix_client::core::ports::Dispatcher;

#[test]
fn test_inline_runs_immediately() {
    let ran = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ran);
    InlineDispatcher.dispatch(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    assert_eq!(ran.load(Ordering::SeqCst), 1);
}

#[test]
fn test_main_queue_defers_until_drained() {
    let (queue, dispatcher) = MainQueue::new();
    let ran = Arc::new(AtomicUsize::new(0));

    for _ in 0..3 {
        let counter = Arc::clone(&ran);
        dispatcher.dispatch(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
    }
    assert_eq!(ran.load(Ordering::SeqCst), 0);

    assert_eq!(queue.run_pending(), 3);
    assert_eq!(ran.load(Ordering::SeqCst), 3);
    assert_eq!(queue.run_pending(), 0);
}

#[test]
fn test_main_queue_runs_jobs_on_owning_thread() {
    let (queue, dispatcher) = MainQueue::new();
    let owner = thread::current().id();
    let (tx, rx) = std::sync::mpsc::channel();

    thread::spawn(move || {
        dispatcher.dispatch(Box::new(move || {
            tx.send(thread::current().id()).unwrap();
        }));
    });

    assert!(queue.run_next(Duration::from_secs(5)));
    assert_eq!(rx.recv().unwrap(), owner);
}

#[test]
fn test_main_queue_run_next_times_out() {
    let (queue, _dispatcher) = MainQueue::new();
    assert!(!queue.run_next(Duration::from_millis(10)));
}

#[test]
fn test_dispatch_after_queue_dropped_does_not_panic() {
    let (queue, dispatcher) = MainQueue::new();
    drop(queue);
    dispatcher.dispatch(Box::new(|| {}));
}
