//! Static rule tables (DMG encounter building values).
//!
//! Everything that scores an encounter reads from here. These are data, not
//! logic: lookups and classification live in the sibling modules.

// =============================================================================
// DIFFICULTY THRESHOLDS
// =============================================================================

/// Per-character xp thresholds for levels 1-20, indexed by `level - 1`.
/// Columns are easy, medium, hard, deadly.
pub const XP_THRESHOLDS: [[u32; 4]; 20] = [
    [25, 50, 75, 100],         // 1
    [50, 100, 150, 200],       // 2
    [75, 150, 225, 400],       // 3
    [125, 250, 375, 500],      // 4
    [250, 500, 750, 1100],     // 5
    [300, 600, 900, 1400],     // 6
    [350, 750, 1100, 1700],    // 7
    [450, 900, 1400, 2100],    // 8
    [550, 1100, 1600, 2400],   // 9
    [600, 1200, 1900, 2800],   // 10
    [800, 1600, 2400, 3600],   // 11
    [1000, 2000, 3000, 4500],  // 12
    [1100, 2200, 3400, 5100],  // 13
    [1250, 2500, 3800, 5700],  // 14
    [1400, 2800, 4300, 6400],  // 15
    [1600, 3200, 4800, 7200],  // 16
    [2000, 3900, 5900, 8800],  // 17
    [2100, 4200, 6300, 9500],  // 18
    [2400, 4900, 7300, 10900], // 19
    [2800, 5700, 8500, 12700], // 20
];

/// Lowest level with a threshold row.
pub const MIN_LEVEL: u32 = 1;

/// Highest level with a threshold row.
pub const MAX_LEVEL: u32 = 20;

// =============================================================================
// CHALLENGE RATING XP
// =============================================================================

/// Xp for whole challenge ratings 0-30, indexed by rating.
pub const WHOLE_RATING_XP: [u32; 31] = [
    10, 200, 450, 700, 1100, 1800, 2300, 2900, 3900, 5000, // 0-9
    5900, 7200, 8400, 10000, 11500, 13000, 15000, 18000, 20000, 22000, // 10-19
    25000, 33000, 41000, 50000, 62000, 75000, 90000, 105000, 120000, 135000, // 20-29
    155000, // 30
];

/// Xp for the fractional ratings, as (denominator of 1/d, xp).
pub const FRACTIONAL_RATING_XP: [(u32, u32); 3] = [(8, 25), (4, 50), (2, 100)];

// =============================================================================
// ENCOUNTER MULTIPLIERS
// =============================================================================

/// Base multiplier steps as (max monster count, multiplier).
/// The first step whose count is >= the group size applies.
pub const SIZE_MULTIPLIER_STEPS: [(usize, f64); 6] = [
    (1, 1.0),
    (2, 1.5),
    (6, 2.0),
    (10, 2.5),
    (14, 3.0),
    (usize::MAX, 4.0),
];

/// Parties this size or smaller count as small.
pub const SMALL_PARTY_MAX: usize = 3;

/// Parties this size or larger count as large.
pub const LARGE_PARTY_MIN: usize = 6;

/// Multiplier adjustment for small parties.
pub const SMALL_PARTY_ADJUSTMENT: f64 = 1.5;

/// Multiplier adjustment for normal parties.
pub const NORMAL_PARTY_ADJUSTMENT: f64 = 1.0;

/// Multiplier adjustment for large parties.
pub const LARGE_PARTY_ADJUSTMENT: f64 = 0.75;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_ascend_within_each_level() {
        for (i, row) in XP_THRESHOLDS.iter().enumerate() {
            assert!(
                row.windows(2).all(|w| w[0] < w[1]),
                "level {} thresholds not ascending: {:?}",
                i + 1,
                row
            );
        }
    }

    #[test]
    fn test_whole_rating_xp_is_non_decreasing() {
        assert!(WHOLE_RATING_XP.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_size_steps_ascend() {
        assert!(SIZE_MULTIPLIER_STEPS
            .windows(2)
            .all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
    }
}
