//! Encounter multiplier math.
//!
//! The effective multiplier is the size step for the number of monsters
//! times an adjustment for the size of the party.

use super::tables::{
    LARGE_PARTY_ADJUSTMENT, LARGE_PARTY_MIN, NORMAL_PARTY_ADJUSTMENT, SIZE_MULTIPLIER_STEPS,
    SMALL_PARTY_ADJUSTMENT, SMALL_PARTY_MAX,
};
use serde::{Deserialize, Serialize};

/// Party size bucket used to adjust the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PartySizeBand {
    Small,
    Normal,
    Large,
}

impl PartySizeBand {
    pub fn from_party_size(party_size: usize) -> Self {
        if party_size <= SMALL_PARTY_MAX {
            PartySizeBand::Small
        } else if party_size >= LARGE_PARTY_MIN {
            PartySizeBand::Large
        } else {
            PartySizeBand::Normal
        }
    }

    pub fn adjustment(&self) -> f64 {
        match self {
            PartySizeBand::Small => SMALL_PARTY_ADJUSTMENT,
            PartySizeBand::Normal => NORMAL_PARTY_ADJUSTMENT,
            PartySizeBand::Large => LARGE_PARTY_ADJUSTMENT,
        }
    }
}

/// Base multiplier for a group of `monster_count` monsters.
pub fn size_step_multiplier(monster_count: usize) -> f64 {
    SIZE_MULTIPLIER_STEPS
        .iter()
        .find(|(max_count, _)| monster_count <= *max_count)
        .map(|(_, multiplier)| *multiplier)
        // Unreachable: the last step is unbounded
        .unwrap_or(4.0)
}

/// Effective multiplier for a group of monsters against a party.
pub fn encounter_multiplier(monster_count: usize, party_size: usize) -> f64 {
    size_step_multiplier(monster_count) * PartySizeBand::from_party_size(party_size).adjustment()
}

/// Base, multiplier and adjusted xp of one group of monsters.
///
/// Only [`XpBreakdown::compute`] builds these, so `adjusted` is always
/// `base * multiplier` rounded half to even.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XpBreakdown {
    pub base: u64,
    pub multiplier: f64,
    pub adjusted: u64,
}

impl XpBreakdown {
    pub fn compute(base: u64, monster_count: usize, party_size: usize) -> Self {
        let multiplier = encounter_multiplier(monster_count, party_size);
        Self {
            base,
            multiplier,
            adjusted: adjusted_xp(base, multiplier),
        }
    }
}

/// `round(base * multiplier)` with ties going to the even neighbour.
pub fn adjusted_xp(base: u64, multiplier: f64) -> u64 {
    (base as f64 * multiplier).round_ties_even() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_steps() {
        assert_eq!(size_step_multiplier(1), 1.0);
        assert_eq!(size_step_multiplier(2), 1.5);
        assert_eq!(size_step_multiplier(3), 2.0);
        assert_eq!(size_step_multiplier(6), 2.0);
        assert_eq!(size_step_multiplier(7), 2.5);
        assert_eq!(size_step_multiplier(10), 2.5);
        assert_eq!(size_step_multiplier(11), 3.0);
        assert_eq!(size_step_multiplier(14), 3.0);
        assert_eq!(size_step_multiplier(15), 4.0);
        assert_eq!(size_step_multiplier(500), 4.0);
    }

    #[test]
    fn test_party_size_bands() {
        assert_eq!(PartySizeBand::from_party_size(1), PartySizeBand::Small);
        assert_eq!(PartySizeBand::from_party_size(3), PartySizeBand::Small);
        assert_eq!(PartySizeBand::from_party_size(4), PartySizeBand::Normal);
        assert_eq!(PartySizeBand::from_party_size(5), PartySizeBand::Normal);
        assert_eq!(PartySizeBand::from_party_size(6), PartySizeBand::Large);
    }

    #[test]
    fn test_encounter_multiplier_combines_both_steps() {
        assert_eq!(encounter_multiplier(1, 4), 1.0);
        assert_eq!(encounter_multiplier(2, 3), 2.25);
        assert_eq!(encounter_multiplier(8, 6), 1.875);
    }

    #[test]
    fn test_adjusted_rounds_half_to_even() {
        // 5 * 1.5 = 7.5 -> 8, 3 * 1.5 = 4.5 -> 4
        assert_eq!(adjusted_xp(5, 1.5), 8);
        assert_eq!(adjusted_xp(3, 1.5), 4);
        assert_eq!(adjusted_xp(450, 1.5), 675);
    }

    #[test]
    fn test_breakdown_adjusted_matches_product() {
        let breakdown = XpBreakdown::compute(900, 2, 4);
        assert_eq!(breakdown.multiplier, 1.5);
        assert_eq!(breakdown.adjusted, 1350);
    }
}
