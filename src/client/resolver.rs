//! Picks the result that names the requested game and converts its times

use crate::{
    types::{DurationRecord, SearchResult},
    utils::duration::seconds_to_hours,
};

/// Find the exact-name match in `results` and return its completion times.
///
/// Names compare after trimming and lowercasing; the first match wins.
/// Returns `None` when nothing matches or the match has no usable times.
pub fn resolve(game_name: &str, results: &[SearchResult]) -> Option<DurationRecord> {
    let wanted = normalize(game_name);

    let Some(game) = results
        .iter()
        .find(|result| normalize(&result.game_name) == wanted)
    else {
        tracing::debug!(
            "No exact match for {:?} among {} results",
            game_name,
            results.len()
        );
        return None;
    };

    let record = DurationRecord {
        game_id: game.game_id,
        main_story: hours(game.comp_main),
        main_extras: hours(game.comp_plus),
        completionist: hours(game.comp_100),
    };

    record.has_data().then_some(record)
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn hours(seconds: Option<i64>) -> Option<f64> {
    seconds.and_then(|s| seconds_to_hours(s as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn mega_man_results() -> Vec<SearchResult> {
        vec![
            SearchResult::new(5772, "Mega Man 2").with_times(Some(7200), None, None),
            SearchResult::new(5771, "Mega Man").with_times(Some(10800), Some(14400), Some(18000)),
            SearchResult::new(9999, "Mega Man").with_times(Some(1), None, None),
        ]
    }

    #[rstest]
    #[case("mega man")]
    #[case("Mega Man ")]
    #[case("  MEGA MAN")]
    fn test_exact_match_ignores_case_and_whitespace(#[case] query: &str) {
        let record = resolve(query, &mega_man_results()).unwrap();
        assert_eq!(record.game_id, 5771);
        assert_eq!(record.main_story, Some(3.0));
        assert_eq!(record.main_extras, Some(4.0));
        assert_eq!(record.completionist, Some(5.0));
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        let results = vec![SearchResult::new(5772, "Mega Man 2").with_times(Some(7200), None, None)];
        assert_eq!(resolve("Mega Man", &results), None);
    }

    #[test]
    fn test_sequel_matches_only_itself() {
        let record = resolve("mega man 2", &mega_man_results()).unwrap();
        assert_eq!(record.game_id, 5772);
        assert_eq!(record.main_extras, None);
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(resolve("Celeste", &[]), None);
    }

    #[test]
    fn test_match_without_data() {
        let results = vec![SearchResult::new(1, "Unreleased").with_times(Some(0), None, Some(-5))];
        assert_eq!(resolve("unreleased", &results), None);
    }

    #[test]
    fn test_seconds_rounding_to_zero_hours_is_no_data() {
        let results = vec![SearchResult::new(1, "Tiny").with_times(Some(10), None, None)];
        assert_eq!(resolve("tiny", &results), None);
    }

    #[test]
    fn test_partial_data() {
        let results = vec![SearchResult::new(2224, "Dark Souls").with_times(Some(36000), Some(0), None)];
        let record = resolve("Dark Souls", &results).unwrap();

        assert_eq!(record.main_story, Some(10.0));
        assert_eq!(record.main_extras, None);
        assert_eq!(record.completionist, None);
    }
}
