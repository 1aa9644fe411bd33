//! HowLongToBeat client
//!
//! Looks up game completion times on howlongtobeat.com. The site guards its
//! search API with credentials that are only minted by its own JavaScript, so
//! the client loads the site in a headless browser, watches the requests the
//! page makes and reuses what it sees.
//!
//! # Features
//!
//! - **Credential extraction**: a headless Chrome observes the landing page
//!   and captures the search key and auth token
//! - **Credential cache**: in-memory, with a configurable lifetime and a
//!   single refresh in flight at a time
//! - **Two search schemes**: the key-in-path locate endpoint, with the
//!   token-authenticated search endpoint as fallback
//! - **Duration resolution**: exact-name matching and seconds to hours
//!
//! # Usage
//!
//! ```bash
//! hltb duration Hollow Knight --human
//! hltb search celeste
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use hltb_client::{HltbClient, Settings};
//!
//! # tokio_test::block_on(async {
//! let client = HltbClient::new(Settings::default())?;
//! let record = client.get_game_duration("Dark Souls").await;
//! println!("{:?}", record);
//! client.destroy().await;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # });
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use client::{HltbClient, HltbClientGeneric, NetworkObserver};
pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use types::{CapturedArtifacts, CredentialPair, DurationRecord, SearchResult};
