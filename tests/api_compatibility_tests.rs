//! Wire format compatibility tests
//!
//! Pins the exact JSON the HLTB endpoints expect and the response shapes
//! they return.

use hltb_client::types::*;
use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_search_payload_matches_site_schema() {
    let request = SearchRequest::for_game("  The Legend of ZELDA ");

    let expected = serde_json::json!({
        "searchType": "games",
        "searchTerms": ["the", "legend", "of", "zelda"],
        "searchPage": 1,
        "size": 20,
        "searchOptions": {
            "games": {
                "userId": 0,
                "platform": "",
                "sortCategory": "popular",
                "rangeCategory": "main",
                "rangeTime": { "min": null, "max": null },
                "gameplay": { "perspective": "", "flow": "", "genre": "", "difficulty": "" },
                "rangeYear": { "min": "", "max": "" },
                "modifier": ""
            },
            "users": { "sortCategory": "postcount" },
            "lists": { "sortCategory": "follows" },
            "filter": "",
            "sort": 0,
            "randomizer": 0
        },
        "useCache": false
    });

    assert_eq!(serde_json::to_value(&request).unwrap(), expected);
}

#[test]
fn test_search_response_parses_with_path_errors() {
    let body = common::MockData::dark_souls().to_string();
    let deserializer = &mut serde_json::Deserializer::from_str(&body);

    let response: SearchResponse = serde_path_to_error::deserialize(deserializer).unwrap();

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].comp_main, Some(36000));
    assert_eq!(response.data[0].release_world, Some(2011));
    assert_eq!(response.data[1].comp_plus, Some(0));
}

#[test]
fn test_bad_result_reports_field_path() {
    let body = r#"{"data":[{"game_id":1,"game_name":"Ok"},{"game_id":"two","game_name":"Bad"}]}"#;
    let deserializer = &mut serde_json::Deserializer::from_str(body);

    let err = serde_path_to_error::deserialize::<_, SearchResponse>(deserializer).unwrap_err();

    assert!(err.path().to_string().starts_with("data[1]"));
}

#[test]
fn test_null_times_are_absent() {
    let result: SearchResult = serde_json::from_value(serde_json::json!({
        "game_id": 7,
        "game_name": "Unreleased",
        "comp_main": null,
        "comp_plus": null,
        "comp_100": null
    }))
    .unwrap();

    assert_eq!(result.comp_main, None);
    assert_eq!(result.comp_100, None);
    assert!(result.extra.is_empty());
}

#[test]
fn test_duration_record_schema() {
    let record = DurationRecord {
        game_id: 2224,
        main_story: Some(10.0),
        main_extras: None,
        completionist: Some(100.0),
    };

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        serde_json::json!({
            "gameId": 2224,
            "mainStory": 10.0,
            "mainExtras": null,
            "completionist": 100.0
        })
    );
}

#[test]
fn test_redacted_artifacts_schema() {
    let captured = CapturedArtifacts::new(
        Some("a1b2c3d4e5f60718".to_string()),
        Some("token-alpha".to_string()),
    );

    assert_eq!(
        serde_json::to_value(captured.redacted()).unwrap(),
        serde_json::json!({
            "searchKey": "a1b2c3…",
            "authToken": "token-…"
        })
    );
}
