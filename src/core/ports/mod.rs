//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the request lifecycle
//! and the things it drives or reports to.
//!
//! Implementations live in the `adapters` module.

mod cancellable;
mod dispatcher;

pub use cancellable::Cancellable;
pub use dispatcher::{Dispatcher, Job};
