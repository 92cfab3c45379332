//! In-flight operation port
//!
//! Defines what the request tracker needs from an operation it owns.

/// An in-flight operation that can be told to stop
///
/// Cancellation is cooperative and best-effort: the operation still
/// reports exactly one outcome afterwards.
pub trait Cancellable: Send {
    /// Signal the operation to stop, consuming the handle
    fn cancel(self);
}
