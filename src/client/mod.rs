//! HowLongToBeat client
//!
//! Credential extraction through an observed browser, the in-memory
//! credential cache, the two search endpoints and duration resolution.

pub mod api;
pub mod cache;
pub mod extractor;
pub mod manager;
pub mod network;
pub mod observer;
pub mod resolver;

pub use api::HltbApi;
pub use cache::CredentialCache;
pub use extractor::{ArtifactHarvester, CredentialExtractor};
pub use manager::{HltbClient, HltbClientGeneric};
pub use network::{ProxySpec, build_http_client};
pub use observer::{CaptureOptions, ChromeObserver, NetworkObserver};
pub use resolver::resolve;
