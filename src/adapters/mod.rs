//! Adapter implementations for I/O concerns
//!
//! This module contains concrete implementations that touch the outside world:
//!
//! - `http/` - reqwest transport and transport-error classification
//! - `imaging/` - JPEG encoding and aspect-ratio cropping
//! - `dispatch/` - Callback delivery contexts

pub mod dispatch;
pub mod http;
pub mod imaging;
