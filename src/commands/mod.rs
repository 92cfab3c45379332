//! Command implementations

mod config_cmd;
mod formats;
mod recognize;

pub use config_cmd::config_cmd;
pub use formats::formats;
pub use recognize::{Aspect, recognize};
