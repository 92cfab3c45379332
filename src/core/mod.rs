//! Core request lifecycle logic
//!
//! This module contains the pure parts of a recognition call with no
//! network or image dependencies. External interactions are abstracted
//! through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (formats, identifiers, results, errors)
//! - `services/` - Tracking and response interpretation
//! - `ports/` - Trait definitions for operations and callback delivery

pub mod models;
pub mod ports;
pub mod services;
