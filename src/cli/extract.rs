//! `hltb extract`: one credential extraction pass, for diagnosing the site

use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::{
    cli::{GlobalArgs, init_logging, load_settings},
    client::{ChromeObserver, CredentialExtractor, NetworkObserver},
    error::format_error,
    utils::version,
};

/// Arguments for `hltb extract`
#[derive(Debug)]
pub struct ExtractArgs {
    pub global: GlobalArgs,
}

/// Run the browser once and print the redacted artifacts
pub async fn run_extract(args: ExtractArgs) -> Result<()> {
    let settings = load_settings(&args.global);
    init_logging(&settings);
    debug!("hltb {}", version::get_detailed_version());

    let observer = Arc::new(ChromeObserver::from_settings(&settings));
    let extractor = CredentialExtractor::new(&settings, Arc::clone(&observer))?;

    let outcome = extractor.extract().await;
    observer.shutdown().await;

    match outcome {
        Ok(captured) => {
            let output = serde_json::json!({
                "page": extractor.page_url(),
                "captured": captured.count(),
                "artifacts": captured.redacted(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Extraction failed: {}", format_error(&e));
            std::process::exit(1);
        }
    }
}
