//! Request tracker - owns every in-flight operation
//!
//! The tracker maps request identifiers to the operations running for
//! them. Callers only ever see identifiers; the operations themselves
//! never leave the tracker except to be cancelled or retired.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::core::models::RequestId;
use crate::core::ports::Cancellable;

/// Serialized map of in-flight operations
pub struct RequestTracker<Op> {
    ops: Mutex<HashMap<RequestId, Op>>,
}

impl<Op: Cancellable> RequestTracker<Op> {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self {
            ops: Mutex::new(HashMap::new()),
        }
    }

    /// Record `op` as the operation for `id`
    ///
    /// An operation already tracked under `id` is cancelled and replaced.
    pub fn start(&self, id: RequestId, op: Op) {
        let mut ops = self.ops.lock();
        if let Some(displaced) = ops.insert(id, op) {
            log::warn!("request {id} was already tracked, cancelling the previous operation");
            displaced.cancel();
        }
    }

    /// Remove and cancel the operation for `id`
    ///
    /// Returns `false` (and does nothing) when `id` is not tracked.
    pub fn cancel(&self, id: RequestId) -> bool {
        let mut ops = self.ops.lock();
        match ops.remove(&id) {
            Some(op) => {
                op.cancel();
                true
            },
            None => false,
        }
    }

    /// Cancel every tracked operation and clear the map
    ///
    /// Returns how many operations were cancelled.
    pub fn cancel_all(&self) -> usize {
        let mut ops = self.ops.lock();
        let count = ops.len();
        for (_, op) in ops.drain() {
            op.cancel();
        }
        count
    }

    /// Retire `id` without cancelling it (the operation finished on its own)
    ///
    /// Returns `false` when `id` was already gone, e.g. after a cancel.
    pub fn complete(&self, id: RequestId) -> bool {
        self.ops.lock().remove(&id).is_some()
    }

    /// Whether `id` is currently tracked
    #[must_use]
    pub fn contains(&self, id: RequestId) -> bool {
        self.ops.lock().contains_key(&id)
    }

    /// Number of tracked operations
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.lock().len()
    }

    /// Whether nothing is in flight
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.lock().is_empty()
    }
}

impl<Op: Cancellable> Default for RequestTracker<Op> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Op> std::fmt::Debug for RequestTracker<Op> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestTracker")
            .field("in_flight", &self.ops.lock().len())
            .finish()
    }
}
