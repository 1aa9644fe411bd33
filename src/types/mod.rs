//! Type definitions for the HLTB client
//!
//! Credential state, the search wire format and resolved durations.

pub mod credentials;
pub mod duration;
pub mod search;

pub use credentials::{CapturedArtifacts, CredentialPair};
pub use duration::{DurationRecord, FormattedDurations};
pub use search::{SearchRequest, SearchResponse, SearchResult};
