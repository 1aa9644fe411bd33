//! Utility functions and helpers
//!
//! Duration conversions and build information.

pub mod duration;
pub mod version;

pub use duration::{format_duration, seconds_to_hours};
pub use version::{VERSION, get_version};
