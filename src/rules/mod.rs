//! Encounter rules: static tables, challenge ratings, difficulty and multipliers.

pub mod challenge_rating;
pub mod difficulty;
pub mod multiplier;
pub mod tables;

pub use challenge_rating::ChallengeRating;
pub use difficulty::{
    estimate_difficulty, level_threshold, party_threshold, Difficulty, DifficultyRating,
};
pub use multiplier::{
    adjusted_xp, encounter_multiplier, size_step_multiplier, PartySizeBand, XpBreakdown,
};
