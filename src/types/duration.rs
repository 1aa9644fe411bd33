//! Resolved completion times

use serde::{Deserialize, Serialize};

/// Completion times of one game, in hours rounded to two decimals
///
/// A `None` field means HLTB has no usable submission for that category,
/// which is different from a zero-length game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationRecord {
    pub game_id: u64,
    pub main_story: Option<f64>,
    pub main_extras: Option<f64>,
    pub completionist: Option<f64>,
}

impl DurationRecord {
    /// True when at least one category has data
    pub fn has_data(&self) -> bool {
        self.main_story.is_some() || self.main_extras.is_some() || self.completionist.is_some()
    }
}

/// Display form of a [`DurationRecord`] for the `--human` CLI output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDurations {
    pub game_id: u64,
    pub main_story: Option<String>,
    pub main_extras: Option<String>,
    pub completionist: Option<String>,
}

impl From<&DurationRecord> for FormattedDurations {
    fn from(record: &DurationRecord) -> Self {
        use crate::utils::duration::format_duration;

        Self {
            game_id: record.game_id,
            main_story: record.main_story.and_then(format_duration),
            main_extras: record.main_extras.and_then(format_duration),
            completionist: record.completionist.and_then(format_duration),
        }
    }
}
