//! Configuration management for the HLTB client
//!
//! This module handles loading and managing configuration settings
//! for both library callers and the `hltb` binary.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::Settings;

// Environment variable tests across the crate must not interleave
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
