//! Difficulty labels, party thresholds and the difficulty rating of a result.

use super::tables::{MAX_LEVEL, MIN_LEVEL, XP_THRESHOLDS};
use serde::{Deserialize, Serialize};

/// A requested encounter difficulty.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Deadly,
}

impl Difficulty {
    /// All labels in ascending order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Deadly,
    ];

    fn column(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Deadly => 3,
        }
    }
}

/// How dangerous a built encounter turned out to be for the actual party.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
pub enum DifficultyRating {
    #[strum(serialize = "trivial")]
    #[serde(rename = "trivial")]
    Trivial,
    #[strum(serialize = "easy")]
    #[serde(rename = "easy")]
    Easy,
    #[strum(serialize = "medium")]
    #[serde(rename = "medium")]
    Medium,
    #[strum(serialize = "hard")]
    #[serde(rename = "hard")]
    Hard,
    #[strum(serialize = "deadly+")]
    #[serde(rename = "deadly+")]
    DeadlyPlus,
}

/// Per-character threshold for one level. Levels outside 1-20 use the level 1 row.
pub fn level_threshold(level: u32, difficulty: Difficulty) -> u32 {
    let row = if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        XP_THRESHOLDS[(level - MIN_LEVEL) as usize]
    } else {
        XP_THRESHOLDS[0]
    };
    row[difficulty.column()]
}

/// Sum of the per-character thresholds for the whole party.
pub fn party_threshold(levels: &[u32], difficulty: Difficulty) -> u64 {
    levels
        .iter()
        .map(|&level| level_threshold(level, difficulty) as u64)
        .sum()
}

/// Buckets an adjusted xp value against the party's four thresholds.
pub fn estimate_difficulty(levels: &[u32], adjusted_xp: u64) -> DifficultyRating {
    if adjusted_xp < party_threshold(levels, Difficulty::Easy) {
        DifficultyRating::Trivial
    } else if adjusted_xp < party_threshold(levels, Difficulty::Medium) {
        DifficultyRating::Easy
    } else if adjusted_xp < party_threshold(levels, Difficulty::Hard) {
        DifficultyRating::Medium
    } else if adjusted_xp < party_threshold(levels, Difficulty::Deadly) {
        DifficultyRating::Hard
    } else {
        DifficultyRating::DeadlyPlus
    }
}
