//! Request lifecycle services
//!
//! - [`tracker`] - Own and cancel in-flight operations by identifier
//! - [`response`] - Turn a transport result into an outcome

pub mod response;
pub mod tracker;

pub use response::interpret;
pub use tracker::RequestTracker;
