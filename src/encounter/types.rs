//! Encounter building options and the built encounter.

use super::budget::Target;
use super::party::Party;
use crate::error::{ConfigError, EncounterError};
use crate::monsters::{Monster, PoolFilter};
use crate::rules::{estimate_difficulty, DifficultyRating, XpBreakdown};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Caps on the random combination search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Independent groups started from scratch
    pub trials: u32,
    /// Growth attempts per trial
    pub retries: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            trials: 500,
            retries: 200,
        }
    }
}

impl SearchLimits {
    /// Smaller search for interactive use and tests.
    pub fn quick() -> Self {
        Self {
            trials: 50,
            retries: 40,
        }
    }
}

/// Configuration for one encounter build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Difficulty label, scaled label or raw xp budget
    pub target: Target,

    /// Which monsters may appear; the environment is also shown in the output
    pub filter: PoolFilter,

    /// Fractional slack around the budget
    pub tolerance: f64,

    /// Largest group the search may grow
    pub max_monsters: usize,

    /// Prefer monsters not already in the group
    pub prefer_variety: bool,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub limits: SearchLimits,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            target: Target::default(),
            filter: PoolFilter::default(),
            tolerance: 0.15,
            max_monsters: 8,
            prefer_variety: true,
            seed: None,
            limits: SearchLimits::default(),
        }
    }
}

impl BuildOptions {
    /// Default options aiming at `target`.
    pub fn for_target(target: Target) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    /// Loads options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), EncounterError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(EncounterError::InvalidOption(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        if self.max_monsters == 0 {
            return Err(EncounterError::InvalidOption(
                "max_monsters must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Inclusive range of adjusted xp accepted around a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpWindow {
    pub budget: u64,
    pub lo: u64,
    pub hi: u64,
}

impl XpWindow {
    /// `[floor(budget * (1 - tolerance)), floor(budget * (1 + tolerance))]`,
    /// with the lower bound saturating at zero.
    pub fn new(budget: u64, tolerance: f64) -> Self {
        let budget_f = budget as f64;
        Self {
            budget,
            lo: (budget_f * (1.0 - tolerance)).max(0.0).floor() as u64,
            hi: (budget_f * (1.0 + tolerance)).floor() as u64,
        }
    }

    pub fn contains(&self, adjusted: u64) -> bool {
        (self.lo..=self.hi).contains(&adjusted)
    }

    /// Distance of an adjusted value from the budget.
    pub fn distance(&self, adjusted: u64) -> u64 {
        adjusted.abs_diff(self.budget)
    }
}

/// A built encounter with its xp math already applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Encounter {
    monsters: Vec<Monster>,
    #[serde(flatten)]
    xp: XpBreakdown,
    difficulty: DifficultyRating,
    environment: Option<String>,
    /// Budget as resolved, before the search clamps it to at least 1
    target_budget: u64,
    window: XpWindow,
}

impl Encounter {
    pub(crate) fn new(
        monsters: Vec<Monster>,
        party: &Party,
        window: XpWindow,
        environment: Option<String>,
    ) -> Self {
        let base = monsters.iter().map(|m| u64::from(m.xp())).sum();
        let xp = XpBreakdown::compute(base, monsters.len(), party.size());
        Self {
            difficulty: estimate_difficulty(party.levels(), xp.adjusted),
            monsters,
            xp,
            environment,
            target_budget: window.budget,
            window,
        }
    }

    /// Records the budget the target resolved to when it differs from the
    /// window's clamped one.
    pub(crate) fn with_target_budget(mut self, target_budget: u64) -> Self {
        self.target_budget = target_budget;
        self
    }

    /// Chosen monsters in the order they were added.
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn xp(&self) -> XpBreakdown {
        self.xp
    }

    pub fn base_xp(&self) -> u64 {
        self.xp.base
    }

    pub fn multiplier(&self) -> f64 {
        self.xp.multiplier
    }

    pub fn adjusted_xp(&self) -> u64 {
        self.xp.adjusted
    }

    /// Rated against the party's own thresholds, not the requested budget.
    pub fn difficulty(&self) -> DifficultyRating {
        self.difficulty
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    /// The requested budget, which may be 0 where the window's is 1.
    pub fn target_budget(&self) -> u64 {
        self.target_budget
    }

    pub fn window(&self) -> XpWindow {
        self.window
    }

    pub fn in_window(&self) -> bool {
        self.window.contains(self.xp.adjusted)
    }

    /// Number of copies of each monster, keyed and sorted by name.
    pub fn monster_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for monster in &self.monsters {
            *counts.entry(monster.name()).or_insert(0) += 1;
        }
        counts
    }
}
