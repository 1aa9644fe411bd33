//! `hltb search` and `hltb duration`

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    HltbClient, Settings,
    cli::{GlobalArgs, game_name, init_logging, load_settings},
    error::format_error,
    types::FormattedDurations,
    utils::version,
};

/// Arguments for `hltb search`
#[derive(Debug)]
pub struct SearchArgs {
    pub global: GlobalArgs,
    pub name: Vec<String>,
}

/// Arguments for `hltb duration`
#[derive(Debug)]
pub struct DurationArgs {
    pub global: GlobalArgs,
    pub name: Vec<String>,
    pub human: bool,
}

fn prepare(global: &GlobalArgs) -> Settings {
    let settings = load_settings(global);
    init_logging(&settings);
    debug!("hltb {}", version::get_detailed_version());
    settings
}

/// Print the raw search results as a JSON array; exit 1 on failure
pub async fn run_search(args: SearchArgs) -> Result<()> {
    let settings = prepare(&args.global);
    let name = game_name(&args.name);
    let client = HltbClient::new(settings)?;

    let outcome = client.search_game(&name).await;
    client.destroy().await;

    match outcome {
        Ok(results) => {
            info!("{} results for {:?}", results.len(), name);
            println!("{}", serde_json::to_string_pretty(&results)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Search failed: {}", format_error(&e));
            std::process::exit(1);
        }
    }
}

/// Print the resolved durations as JSON, or `null` when unknown
pub async fn run_duration(args: DurationArgs) -> Result<()> {
    let settings = prepare(&args.global);
    let name = game_name(&args.name);
    let client = HltbClient::new(settings)?;

    let record = client.get_game_duration(&name).await;
    client.destroy().await;

    let output = match (&record, args.human) {
        (Some(record), true) => serde_json::to_string_pretty(&FormattedDurations::from(record))?,
        _ => serde_json::to_string_pretty(&record)?,
    };
    println!("{}", output);

    Ok(())
}
