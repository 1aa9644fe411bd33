//! Search payload and response types
//!
//! The locate and search endpoints accept the same body and return the
//! same `{ "data": [...] }` envelope.

use serde::{Deserialize, Serialize};

/// Body posted to both search endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Always `"games"`
    pub search_type: String,
    /// Lowercased whitespace-separated words of the query
    pub search_terms: Vec<String>,
    /// 1-based page index
    pub search_page: u32,
    /// Page size
    pub size: u32,
    /// Fixed filter/sort options
    pub search_options: SearchOptions,
    /// Ask the remote side not to serve cached results
    pub use_cache: bool,
}

impl SearchRequest {
    /// Build the default first-page query for a game name
    pub fn for_game(game_name: &str) -> Self {
        Self {
            search_type: "games".to_string(),
            search_terms: tokenize(game_name),
            search_page: 1,
            size: 20,
            search_options: SearchOptions::default(),
            use_cache: false,
        }
    }

    /// Request another page of the same query
    pub fn with_page(mut self, page: u32) -> Self {
        self.search_page = page.max(1);
        self
    }
}

/// Split on whitespace and lowercase each word
pub fn tokenize(game_name: &str) -> Vec<String> {
    game_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// `searchOptions` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub games: GameOptions,
    pub users: SortOptions,
    pub lists: SortOptions,
    pub filter: String,
    pub sort: u32,
    pub randomizer: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            games: GameOptions::default(),
            users: SortOptions {
                sort_category: "postcount".to_string(),
            },
            lists: SortOptions {
                sort_category: "follows".to_string(),
            },
            filter: String::new(),
            sort: 0,
            randomizer: 0,
        }
    }
}

/// `searchOptions.games` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOptions {
    pub user_id: u64,
    pub platform: String,
    pub sort_category: String,
    pub range_category: String,
    pub range_time: RangeTime,
    pub gameplay: Gameplay,
    pub range_year: RangeYear,
    pub modifier: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            user_id: 0,
            platform: String::new(),
            sort_category: "popular".to_string(),
            range_category: "main".to_string(),
            range_time: RangeTime::default(),
            gameplay: Gameplay::default(),
            range_year: RangeYear::default(),
            modifier: String::new(),
        }
    }
}

/// Completion time range filter; `null` bounds mean unbounded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeTime {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// Release year range filter; empty strings mean unbounded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeYear {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gameplay {
    pub perspective: String,
    pub flow: String,
    pub genre: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOptions {
    pub sort_category: String,
}

/// Response envelope of both search endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching games; absent means no results
    #[serde(default)]
    pub data: Vec<SearchResult>,
}

/// One game entry as returned by HLTB
///
/// Completion times are in seconds. Fields this crate does not interpret are
/// kept in `extra` so callers can still reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub game_id: u64,
    pub game_name: String,
    #[serde(default)]
    pub game_alias: Option<String>,
    #[serde(default)]
    pub game_type: Option<String>,
    #[serde(default)]
    pub game_image: Option<String>,
    /// Main story, seconds
    #[serde(default)]
    pub comp_main: Option<i64>,
    /// Main + extras, seconds
    #[serde(default)]
    pub comp_plus: Option<i64>,
    /// Completionist, seconds
    #[serde(default)]
    pub comp_100: Option<i64>,
    /// All styles, seconds
    #[serde(default)]
    pub comp_all: Option<i64>,
    #[serde(default)]
    pub release_world: Option<i32>,
    #[serde(default)]
    pub profile_platform: Option<String>,
    #[serde(default)]
    pub review_score: Option<i32>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SearchResult {
    /// Minimal result, mostly useful for fixtures
    pub fn new(game_id: u64, game_name: impl Into<String>) -> Self {
        Self {
            game_id,
            game_name: game_name.into(),
            game_alias: None,
            game_type: None,
            game_image: None,
            comp_main: None,
            comp_plus: None,
            comp_100: None,
            comp_all: None,
            release_world: None,
            profile_platform: None,
            review_score: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the three completion times, in seconds
    pub fn with_times(mut self, main: Option<i64>, plus: Option<i64>, full: Option<i64>) -> Self {
        self.comp_main = main;
        self.comp_plus = plus;
        self.comp_100 = full;
        self
    }
}
