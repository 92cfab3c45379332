//! Dispatcher implementations
//!
//! - [`InlineDispatcher`] runs callbacks where the request completed
//! - [`MainQueue`] hands callbacks to a thread that drains them itself,
//!   which is how a UI thread receives completions

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crate::core::ports::{Dispatcher, Job};

/// Runs each job immediately on the calling task
///
/// For a client this is a tokio worker thread, never the caller's own.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineDispatcher;

impl Dispatcher for InlineDispatcher {
    fn dispatch(&self, job: Job) {
        job();
    }
}

/// Sending half of a [`MainQueue`]
#[derive(Debug, Clone)]
pub struct MainQueueDispatcher {
    sender: Sender<Job>,
}

impl Dispatcher for MainQueueDispatcher {
    fn dispatch(&self, job: Job) {
        if self.sender.send(job).is_err() {
            log::warn!("main queue was dropped, completion callback discarded");
        }
    }
}

/// Queue of callbacks owned by the thread that should run them
pub struct MainQueue {
    receiver: Receiver<Job>,
}

impl MainQueue {
    /// Create a queue and the dispatcher that feeds it
    #[must_use]
    pub fn new() -> (Self, MainQueueDispatcher) {
        let (sender, receiver) = mpsc::channel();
        (Self { receiver }, MainQueueDispatcher { sender })
    }

    /// Run every callback queued so far, returning how many ran
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        while let Ok(job) = self.receiver.try_recv() {
            job();
            ran += 1;
        }
        ran
    }

    /// Wait up to `timeout` for one callback and run it
    ///
    /// Returns `false` on timeout or when every dispatcher is gone.
    pub fn run_next(&self, timeout: Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(job) => {
                job();
                true
            },
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }
}

impl std::fmt::Debug for MainQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainQueue").finish_non_exhaustive()
    }
}
