//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use hltb_client::{
    Result,
    client::{CaptureOptions, NetworkObserver},
    config::Settings,
    types::CapturedArtifacts,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const KEY_A: &str = "a1b2c3d4e5f60718";
pub const KEY_B: &str = "ffeeddccbbaa9988";
pub const TOKEN_A: &str = "token-alpha";
pub const TOKEN_B: &str = "token-bravo";

/// One scripted capture outcome
#[derive(Debug, Clone)]
pub enum Capture {
    Artifacts(CapturedArtifacts),
    BrowserFailure,
}

/// Fake browser replaying scripted captures in order; the last one repeats
#[derive(Debug)]
pub struct ScriptedObserver {
    script: Mutex<VecDeque<Capture>>,
    invocations: AtomicUsize,
    pages: Mutex<Vec<String>>,
}

impl ScriptedObserver {
    pub fn new(script: Vec<Capture>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            invocations: AtomicUsize::new(0),
            pages: Mutex::new(Vec::new()),
        }
    }

    /// Every capture returns the same artifacts
    pub fn always(key: Option<&str>, token: Option<&str>) -> Self {
        Self::new(vec![Capture::Artifacts(artifacts(key, token))])
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    pub fn pages(&self) -> Vec<String> {
        self.pages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NetworkObserver for ScriptedObserver {
    async fn capture(&self, page_url: &str, _options: &CaptureOptions) -> Result<CapturedArtifacts> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        self.pages.lock().unwrap().push(page_url.to_string());

        let next = {
            let mut script = self.script.lock().unwrap();
            if script.len() > 1 {
                script.pop_front()
            } else {
                script.front().cloned()
            }
        };

        match next {
            Some(Capture::Artifacts(artifacts)) => Ok(artifacts),
            Some(Capture::BrowserFailure) => Err(hltb_client::Error::browser(
                "navigate",
                "net::ERR_CONNECTION_REFUSED",
            )),
            None => Ok(CapturedArtifacts::default()),
        }
    }
}

pub fn artifacts(key: Option<&str>, token: Option<&str>) -> CapturedArtifacts {
    CapturedArtifacts::new(key.map(str::to_string), token.map(str::to_string))
}

/// Test configuration factory
pub struct TestConfig;

impl TestConfig {
    /// Settings pointing at a mock server
    pub fn for_server(server: &MockServer) -> Settings {
        let mut settings = Settings::default();
        settings.site.base_url = server.uri();
        settings.logging.level = "debug".to_string();
        settings.network.connect_timeout = 5;
        settings.network.request_timeout = 10;
        settings
    }
}

/// Test data factory
pub struct MockData;

impl MockData {
    /// Search response body with the given `(id, name, comp_main, comp_plus, comp_100)` rows
    pub fn results(rows: &[(u64, &str, i64, i64, i64)]) -> serde_json::Value {
        let data: Vec<_> = rows
            .iter()
            .map(|(id, name, main, plus, full)| {
                serde_json::json!({
                    "game_id": id,
                    "game_name": name,
                    "game_type": "game",
                    "comp_main": main,
                    "comp_plus": plus,
                    "comp_100": full,
                    "comp_all": main,
                    "release_world": 2011,
                    "profile_platform": "PC, PlayStation 3, Xbox 360"
                })
            })
            .collect();
        serde_json::json!({ "color": "blue", "title": "", "category": "games", "data": data })
    }

    pub fn dark_souls() -> serde_json::Value {
        Self::results(&[
            (2224, "Dark Souls", 36000, 216000, 360000),
            (2225, "Dark Souls II", 162000, 0, 0),
        ])
    }
}

/// Mock server factory
pub struct MockServerFactory;

impl MockServerFactory {
    pub async fn new() -> MockServer {
        MockServer::start().await
    }

    /// `POST /api/locate/{key}` answering `status` with `body`, expected `times` times
    pub async fn mount_locate(
        server: &MockServer,
        key: &str,
        status: u16,
        body: serde_json::Value,
        times: u64,
    ) {
        Mock::given(method("POST"))
            .and(path(format!("/api/locate/{}", key)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(times)
            .mount(server)
            .await;
    }

    /// `POST /api/search` with `x-auth-token: {token}`, expected `times` times
    pub async fn mount_search(
        server: &MockServer,
        token: &str,
        status: u16,
        body: serde_json::Value,
        times: u64,
    ) {
        Mock::given(method("POST"))
            .and(path("/api/search"))
            .and(header("x-auth-token", token))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(times)
            .mount(server)
            .await;
    }

    /// Any search endpoint call fails the test on drop
    pub async fn forbid_search(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(server)
            .await;
    }

    /// Any locate endpoint call fails the test on drop
    pub async fn forbid_locate(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path_regex("^/api/locate/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(server)
            .await;
    }
}
