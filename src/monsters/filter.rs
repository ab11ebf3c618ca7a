//! Narrowing the monster pool before an encounter is built.

use super::types::Monster;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Predicates applied to a monster list. Every filter is optional (an empty
/// list counts as absent) and the ones present must all pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolFilter {
    /// Keep monsters found in this environment (exact match).
    pub environment: Option<String>,
    /// Keep monsters whose type is one of these (case-insensitive).
    pub include_types: Vec<String>,
    /// Drop monsters whose type is one of these (case-insensitive).
    pub exclude_types: Vec<String>,
    /// Keep monsters with at least one of these tags (case-insensitive).
    pub tags_any: Vec<String>,
}

impl PoolFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn with_include_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclude_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags_any<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags_any = tags.into_iter().map(Into::into).collect();
        self
    }

    /// True when no filter is set and `apply` keeps everything.
    pub fn is_empty(&self) -> bool {
        self.environment.as_deref().map_or(true, str::is_empty)
            && self.include_types.is_empty()
            && self.exclude_types.is_empty()
            && self.tags_any.is_empty()
    }

    /// Returns the monsters passing every filter, in their original order.
    pub fn apply(&self, monsters: &[Monster]) -> Vec<Monster> {
        let include = lowercase_set(&self.include_types);
        let exclude = lowercase_set(&self.exclude_types);
        let tags = lowercase_set(&self.tags_any);
        let environment = self.environment.as_deref().filter(|e| !e.is_empty());

        let pool: Vec<Monster> = monsters
            .iter()
            .filter(|m| environment.map_or(true, |env| m.environments().iter().any(|e| e == env)))
            .filter(|m| include.is_empty() || include.contains(&m.creature_type().to_lowercase()))
            .filter(|m| exclude.is_empty() || !exclude.contains(&m.creature_type().to_lowercase()))
            .filter(|m| tags.is_empty() || m.tags().iter().any(|t| tags.contains(&t.to_lowercase())))
            .cloned()
            .collect();

        tracing::debug!(
            before = monsters.len(),
            after = pool.len(),
            "filtered monster pool"
        );
        pool
    }
}

fn lowercase_set(values: &[String]) -> HashSet<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ChallengeRating;

    fn monster(name: &str, creature_type: &str, tags: &[&str], environments: &[&str]) -> Monster {
        Monster::new(
            name,
            ChallengeRating::whole(1),
            creature_type,
            tags.iter().map(|t| t.to_string()).collect(),
            environments.iter().map(|e| e.to_string()).collect(),
        )
    }

    fn sample() -> Vec<Monster> {
        vec![
            monster("Zombie", "undead", &["undead-fortitude"], &["graveyard", "ruins"]),
            monster("Wolf", "beast", &["pack-tactics"], &["forest"]),
            monster("Bandit", "humanoid", &["pack-tactics", "dagger"], &["roadside"]),
            monster("Ghoul", "Undead", &["paralysis"], &["graveyard"]),
        ]
    }

    fn names(pool: &[Monster]) -> Vec<&str> {
        pool.iter().map(|m| m.name()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = PoolFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()), sample());
    }

    #[test]
    fn test_environment_is_exact() {
        let pool = PoolFilter::new().with_environment("graveyard").apply(&sample());
        assert_eq!(names(&pool), ["Zombie", "Ghoul"]);
        let pool = PoolFilter::new().with_environment("Graveyard").apply(&sample());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_include_types_case_insensitive() {
        let pool = PoolFilter::new().with_include_types(["UNDEAD"]).apply(&sample());
        assert_eq!(names(&pool), ["Zombie", "Ghoul"]);
    }

    #[test]
    fn test_exclude_types() {
        let pool = PoolFilter::new()
            .with_exclude_types(["undead", "beast"])
            .apply(&sample());
        assert_eq!(names(&pool), ["Bandit"]);
    }

    #[test]
    fn test_tags_any_needs_one_shared_tag() {
        let pool = PoolFilter::new()
            .with_tags_any(["Pack-Tactics", "nonexistent"])
            .apply(&sample());
        assert_eq!(names(&pool), ["Wolf", "Bandit"]);
    }

    #[test]
    fn test_filters_compose() {
        let pool = PoolFilter::new()
            .with_include_types(["undead", "humanoid"])
            .with_tags_any(["paralysis", "dagger"])
            .with_environment("graveyard")
            .apply(&sample());
        assert_eq!(names(&pool), ["Ghoul"]);
    }

    #[test]
    fn test_apply_does_not_touch_input() {
        let monsters = sample();
        let _ = PoolFilter::new().with_include_types(["beast"]).apply(&monsters);
        assert_eq!(monsters, sample());
    }
}
