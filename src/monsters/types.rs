//! Monster and monster pool types.

use super::seed::seed_monsters;
use crate::rules::ChallengeRating;
use serde::Serialize;
use std::sync::{Arc, OnceLock};

/// A monster stat line as far as encounter building cares.
///
/// `xp` is derived from the challenge rating when the monster is built and
/// the fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monster {
    name: String,
    challenge_rating: ChallengeRating,
    #[serde(rename = "type")]
    creature_type: String,
    tags: Vec<String>,
    environments: Vec<String>,
    xp: u32,
}

impl Monster {
    pub fn new(
        name: impl Into<String>,
        challenge_rating: ChallengeRating,
        creature_type: impl Into<String>,
        tags: Vec<String>,
        environments: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            challenge_rating,
            creature_type: creature_type.into(),
            tags,
            environments,
            xp: challenge_rating.xp(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn challenge_rating(&self) -> ChallengeRating {
        self.challenge_rating
    }

    /// Creature type ("undead", "beast", ...).
    pub fn creature_type(&self) -> &str {
        &self.creature_type
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn environments(&self) -> &[String] {
        &self.environments
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }
}

/// Immutable snapshot of the monsters available to encounter building.
///
/// Cloning shares the underlying list. Extending builds a new snapshot, so a
/// pool handed to a build request never changes underneath it.
#[derive(Debug, Clone)]
pub struct MonsterPool {
    monsters: Arc<[Monster]>,
}

static SEED_POOL: OnceLock<MonsterPool> = OnceLock::new();

impl MonsterPool {
    pub fn new(monsters: Vec<Monster>) -> Self {
        Self {
            monsters: monsters.into(),
        }
    }

    /// The built-in monster list.
    pub fn seed() -> Self {
        SEED_POOL
            .get_or_init(|| MonsterPool::new(seed_monsters()))
            .clone()
    }

    /// Returns a new pool with `extra` appended after the current monsters.
    pub fn extend(&self, extra: impl IntoIterator<Item = Monster>) -> Self {
        let monsters: Vec<Monster> = self.monsters.iter().cloned().chain(extra).collect();
        Self::new(monsters)
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> Monster {
        Monster::new(
            "Goblin",
            ChallengeRating::ONE_QUARTER,
            "humanoid",
            vec!["nimble".to_string()],
            vec!["forest".to_string()],
        )
    }

    #[test]
    fn test_xp_derived_from_rating() {
        assert_eq!(goblin().xp(), 50);
        let odd = Monster::new(
            "Oddity",
            ChallengeRating::new(1, 3).unwrap(),
            "aberration",
            vec![],
            vec![],
        );
        assert_eq!(odd.xp(), 0);
    }

    #[test]
    fn test_extend_leaves_original_snapshot_untouched() {
        let base = MonsterPool::new(vec![goblin()]);
        let extended = base.extend(vec![goblin(), goblin()]);
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 3);
    }

    #[test]
    fn test_seed_pool_is_shared() {
        let a = MonsterPool::seed();
        let b = MonsterPool::seed();
        assert!(Arc::ptr_eq(&a.monsters, &b.monsters));
        assert!(a.len() > 500);
    }

    #[test]
    fn test_pool_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MonsterPool>();
    }
}
