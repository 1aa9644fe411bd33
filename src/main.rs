//! `hltb`: HowLongToBeat lookups from the command line
//!
//! # Usage
//!
//! ```bash
//! hltb search dark souls
//! hltb duration "Hollow Knight" --human
//! hltb extract --verbose
//! ```
//!
//! Results go to stdout as JSON; logs go to stderr.

use clap::{Args, Parser, Subcommand};

use hltb_client::cli::{
    GlobalArgs,
    extract::{ExtractArgs, run_extract},
    search::{DurationArgs, SearchArgs, run_duration, run_search},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "hltb")]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct GlobalOpts {
    /// Configuration file path
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl From<GlobalOpts> for GlobalArgs {
    fn from(opts: GlobalOpts) -> Self {
        Self {
            config: opts.config,
            verbose: opts.verbose,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search HLTB and print the raw results
    Search {
        /// Game name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Print the completion times of one game
    Duration {
        /// Game name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Print "12h 30m" style strings instead of hours
        #[arg(long)]
        human: bool,
    },

    /// Run one credential extraction and print what was captured
    Extract,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let global = GlobalArgs::from(cli.global);

    match cli.command {
        Commands::Search { name } => run_search(SearchArgs { global, name }).await,
        Commands::Duration { name, human } => {
            run_duration(DurationArgs {
                global,
                name,
                human,
            })
            .await
        }
        Commands::Extract => run_extract(ExtractArgs { global }).await,
    }
}
