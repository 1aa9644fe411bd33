//! Command line front-end for the `hltb` binary
//!
//! Shared settings loading and logging setup; one submodule per command.

pub mod extract;
pub mod search;

use crate::{Settings, config::ConfigLoader};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Options accepted by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub config: Option<String>,
    pub verbose: bool,
}

/// Load settings for a CLI run.
///
/// Precedence: `--config`, then `HLTB_CONFIG` or the default location,
/// then environment overrides. A broken config file falls back to defaults
/// with a warning on stderr.
pub fn load_settings(args: &GlobalArgs) -> Settings {
    let config_path = match &args.config {
        Some(config) => Some(PathBuf::from(config)),
        None => ConfigLoader::get_config_path(),
    };

    let mut settings = ConfigLoader::new()
        .load(config_path.as_deref())
        .unwrap_or_else(|e| {
            // Logging is not up yet
            eprintln!(
                "Warning: Failed to load configuration: {}. Using defaults.",
                e
            );
            Settings::default()
        });

    settings.logging.verbose = settings.logging.verbose || args.verbose;
    settings
}

/// Install the stderr subscriber.
///
/// `--verbose` wins, then `RUST_LOG`, then `logging.level`.
pub fn init_logging(settings: &Settings) {
    let env_filter = if settings.logging.verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&settings.logging.level)
    };

    // try_init: a second call (e.g. from tests) is a no-op
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Join positional words into one game name
pub fn game_name(words: &[String]) -> String {
    words.join(" ").trim().to_string()
}
