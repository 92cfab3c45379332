//! Callback delivery port
//!
//! Completion handling runs on a background task. A dispatcher moves the
//! caller's callback onto the execution context the caller wants it on,
//! typically a UI or main thread.

/// Work item handed to a dispatcher
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Execution context for completion callbacks
pub trait Dispatcher: Send + Sync {
    /// Run `job` on this dispatcher's context
    fn dispatch(&self, job: Job);
}
