//! Random combination search for a group of monsters near an xp budget.
//!
//! Each trial starts from one affordable monster and keeps adding monsters
//! while the adjusted xp stays under the window's upper bound. Every group
//! that lands inside the window is a candidate and the one closest to the
//! budget wins. When no trial lands in the window two fallbacks guarantee a
//! result: the strongest monster that fits alone, and failing that a pile of
//! the cheapest monster.

use super::party::Party;
use super::types::{BuildOptions, Encounter, XpWindow};
use crate::error::EncounterError;
use crate::monsters::{Monster, MonsterPool};
use crate::rules::{adjusted_xp, encounter_multiplier};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Builds an encounter from an already filtered pool.
///
/// The generator is seeded from `options.seed`, or from entropy when no seed
/// is set.
pub fn build_encounter(
    party: &Party,
    pool: &[Monster],
    options: &BuildOptions,
) -> Result<Encounter, EncounterError> {
    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    build_encounter_with_rng(party, pool, options, &mut rng)
}

/// Applies `options.filter` to a pool snapshot, then builds an encounter.
pub fn build_from_pool(
    party: &Party,
    pool: &MonsterPool,
    options: &BuildOptions,
) -> Result<Encounter, EncounterError> {
    let filtered = options.filter.apply(pool.monsters());
    build_encounter(party, &filtered, options)
}

/// Builds an encounter using the caller's generator.
///
/// Fails only on invalid options or an empty pool, and both are checked
/// before the generator is touched.
pub fn build_encounter_with_rng<R: Rng + ?Sized>(
    party: &Party,
    pool: &[Monster],
    options: &BuildOptions,
    rng: &mut R,
) -> Result<Encounter, EncounterError> {
    options.validate()?;
    if pool.is_empty() {
        return Err(EncounterError::EmptyPool);
    }

    let target_budget = options.target.budget(party.levels());
    let budget = target_budget.max(1);
    let window = XpWindow::new(budget, options.tolerance);
    tracing::debug!(
        requested = %options.target,
        budget,
        lo = window.lo,
        hi = window.hi,
        pool = pool.len(),
        "resolved encounter budget"
    );

    let search = Search::new(party, pool, window, options);
    let chosen = match search.run(rng) {
        Some(chosen) => chosen,
        None => search.fallback(),
    };

    let encounter = Encounter::new(chosen, party, window, options.filter.environment.clone())
        .with_target_budget(target_budget);
    if !encounter.in_window() {
        tracing::warn!(
            adjusted = encounter.adjusted_xp(),
            lo = window.lo,
            hi = window.hi,
            "encounter lies outside the requested window"
        );
    }
    Ok(encounter)
}

/// A group under construction: indices into the working pool, its base xp and
/// how many copies of each name it holds.
#[derive(Debug, Clone)]
struct Group {
    members: Vec<usize>,
    base: u64,
    /// Copies in the group, by name slot
    uses: Vec<u32>,
    /// Working-pool entries whose name is not in the group yet
    fresh: usize,
}

struct Search<'a> {
    pool: &'a [Monster],
    /// Monsters affordable under the window's upper bound, cheapest first
    working: Vec<&'a Monster>,
    window: XpWindow,
    party_size: usize,
    max_monsters: usize,
    prefer_variety: bool,
    trials: u32,
    retries: u32,
    /// Name slot of each working-pool entry
    name_of: Vec<usize>,
    /// Working-pool entries sharing each name slot
    name_sizes: Vec<usize>,
}

impl<'a> Search<'a> {
    fn new(party: &Party, pool: &'a [Monster], window: XpWindow, options: &BuildOptions) -> Self {
        let mut working: Vec<&Monster> = pool
            .iter()
            .filter(|m| u64::from(m.xp()) <= window.hi)
            .collect();
        // Stable, so equal xp keeps pool order
        working.sort_by_key(|m| m.xp());

        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut name_of = Vec::with_capacity(working.len());
        let mut name_sizes: Vec<usize> = Vec::new();
        for monster in &working {
            let next = slots.len();
            let slot = *slots.entry(monster.name()).or_insert(next);
            if slot == name_sizes.len() {
                name_sizes.push(0);
            }
            name_sizes[slot] += 1;
            name_of.push(slot);
        }

        Self {
            pool,
            working,
            window,
            party_size: party.size(),
            max_monsters: options.max_monsters,
            prefer_variety: options.prefer_variety,
            trials: options.limits.trials,
            retries: options.limits.retries,
            name_of,
            name_sizes,
        }
    }

    fn empty_group(&self) -> Group {
        Group {
            members: Vec::new(),
            base: 0,
            uses: vec![0; self.name_sizes.len()],
            fresh: self.working.len(),
        }
    }

    fn add(&self, group: &mut Group, index: usize) {
        let slot = self.name_of[index];
        if group.uses[slot] == 0 {
            group.fresh -= self.name_sizes[slot];
        }
        group.uses[slot] += 1;
        group.members.push(index);
        group.base += self.xp(index);
    }

    /// Takes back the most recent addition.
    fn undo(&self, group: &mut Group) {
        let Some(index) = group.members.pop() else {
            return;
        };
        let slot = self.name_of[index];
        group.uses[slot] -= 1;
        if group.uses[slot] == 0 {
            group.fresh += self.name_sizes[slot];
        }
        group.base -= self.xp(index);
    }

    fn xp(&self, index: usize) -> u64 {
        u64::from(self.working[index].xp())
    }

    fn adjusted(&self, base: u64, count: usize) -> u64 {
        adjusted_xp(base, encounter_multiplier(count, self.party_size))
    }

    /// Runs the random trials and returns the in-window group closest to the
    /// budget, if any trial found one.
    fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Vec<Monster>> {
        let opening: Vec<usize> = (0..self.working.len())
            .filter(|&i| self.xp(i) <= self.window.budget.max(1))
            .collect();
        if opening.is_empty() {
            tracing::debug!("no affordable opening monster, skipping random search");
            return None;
        }

        let mut best: Option<(Vec<usize>, u64)> = None;
        let mut accepted = 0usize;
        let mut trials_run = 0u32;

        for _ in 0..self.trials {
            trials_run += 1;
            let mut group = self.empty_group();
            let first = opening[rng.gen_range(0..opening.len())];
            self.add(&mut group, first);

            let mut tries = 0;
            while group.members.len() < self.max_monsters && tries < self.retries {
                tries += 1;
                let pick = self.draw(&group, rng);
                self.add(&mut group, pick);

                let adjusted = self.adjusted(group.base, group.members.len());
                if adjusted > self.window.hi {
                    self.undo(&mut group);
                    continue;
                }
                if self.window.contains(adjusted) {
                    accepted += 1;
                    let closer = best.as_ref().map_or(true, |(_, best_adjusted)| {
                        self.window.distance(adjusted) < self.window.distance(*best_adjusted)
                    });
                    if closer {
                        best = Some((group.members.clone(), adjusted));
                    }
                }
            }

            // Nothing can beat an exact hit
            if matches!(best, Some((_, adjusted)) if adjusted == self.window.budget) {
                break;
            }
        }

        tracing::debug!(
            trials = trials_run,
            accepted,
            best = ?best.as_ref().map(|(_, adjusted)| *adjusted),
            "random search finished"
        );
        best.map(|(members, _)| members.into_iter().map(|i| self.working[i].clone()).collect())
    }

    /// Draws the next working-pool index to try.
    ///
    /// With variety preferred, monsters whose name is already in the group
    /// are skipped unless every name has been used.
    fn draw<R: Rng + ?Sized>(&self, group: &Group, rng: &mut R) -> usize {
        if self.prefer_variety && group.fresh > 0 {
            let nth = rng.gen_range(0..group.fresh);
            let fresh = (0..self.working.len())
                .filter(|&i| group.uses[self.name_of[i]] == 0)
                .nth(nth);
            if let Some(index) = fresh {
                return index;
            }
        }
        rng.gen_range(0..self.working.len())
    }

    fn fallback(&self) -> Vec<Monster> {
        if let Some(monster) = self
            .working
            .iter()
            .rev()
            .find(|m| self.adjusted(u64::from(m.xp()), 1) <= self.window.hi)
        {
            tracing::info!(monster = monster.name(), "no group fit the window, using strongest single monster");
            return vec![(*monster).clone()];
        }

        // The pool is non-empty, so a cheapest monster exists
        let cheapest = match self.pool.iter().min_by_key(|m| m.xp()) {
            Some(monster) => monster,
            None => return Vec::new(),
        };
        let xp = u64::from(cheapest.xp());
        let mut count = 1;
        while count < self.max_monsters && self.adjusted(xp * count as u64, count) < self.window.lo {
            count += 1;
        }
        tracing::info!(
            monster = cheapest.name(),
            count,
            "no single monster fit the window, stacking the cheapest"
        );
        vec![cheapest.clone(); count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::{SearchLimits, Target};
    use crate::rules::{ChallengeRating, Difficulty, DifficultyRating};

    fn monster(name: &str, rating: ChallengeRating) -> Monster {
        Monster::new(name, rating, "humanoid", Vec::new(), vec!["forest".to_string()])
    }

    fn medium() -> BuildOptions {
        BuildOptions::for_target(Target::Label(Difficulty::Medium))
    }

    fn seeded(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_empty_pool_fails_before_any_draw() {
        let mut rng = seeded(7);
        let result = build_encounter_with_rng(&Party::uniform(4, 5), &[], &medium(), &mut rng);
        assert_eq!(result, Err(EncounterError::EmptyPool));
        assert_eq!(rng.gen::<u64>(), seeded(7).gen::<u64>());
    }

    #[test]
    fn test_invalid_options_rejected() {
        let pool = [monster("Orc", ChallengeRating::ONE_HALF)];
        let options = BuildOptions {
            max_monsters: 0,
            ..medium()
        };
        let result = build_encounter(&Party::uniform(4, 5), &pool, &options);
        assert!(matches!(result, Err(EncounterError::InvalidOption(_))));
    }

    #[test]
    fn test_cheap_monsters_fill_to_exact_budget() {
        // 8 x 100 xp at x2.5 is exactly the 2000 medium budget
        let pool = [monster("Orc", ChallengeRating::ONE_HALF)];
        let encounter =
            build_encounter_with_rng(&Party::uniform(4, 5), &pool, &medium(), &mut seeded(1))
                .unwrap();
        assert_eq!(encounter.monsters().len(), 8);
        assert_eq!(encounter.base_xp(), 800);
        assert_eq!(encounter.adjusted_xp(), 2000);
        assert_eq!(encounter.difficulty(), DifficultyRating::Medium);
        assert!(encounter.in_window());
    }

    #[test]
    fn test_solo_fallback_when_no_group_fits() {
        // Two ogres are 1350, three are 2700: nothing lands in [1700, 2300]
        let pool = [monster("Ogre", ChallengeRating::whole(2))];
        let encounter =
            build_encounter_with_rng(&Party::uniform(4, 5), &pool, &medium(), &mut seeded(3))
                .unwrap();
        assert_eq!(encounter.monsters().len(), 1);
        assert_eq!(encounter.adjusted_xp(), 450);
        assert!(!encounter.in_window());
    }

    #[test]
    fn test_cheapest_fallback_when_everything_is_too_strong() {
        // Budget 50, window [42, 57]; a CR 5 monster never fits
        let pool = [monster("Troll", ChallengeRating::whole(5))];
        let encounter =
            build_encounter_with_rng(&Party::uniform(1, 1), &pool, &medium(), &mut seeded(5))
                .unwrap();
        assert_eq!(encounter.monsters().len(), 1);
        assert_eq!(encounter.base_xp(), 1800);
        assert_eq!(encounter.adjusted_xp(), 2700);
        assert_eq!(encounter.difficulty(), DifficultyRating::DeadlyPlus);
    }

    #[test]
    fn test_solo_fallback_takes_strongest_that_fits() {
        let pool = [
            monster("Rat", ChallengeRating::ZERO),
            monster("Wolf", ChallengeRating::ONE_QUARTER),
            monster("Ogre", ChallengeRating::whole(2)),
        ];
        let search = Search::new(
            &Party::uniform(4, 1),
            &pool,
            XpWindow::new(70, 0.0),
            &BuildOptions::default(),
        );
        let chosen = search.fallback();
        assert_eq!(chosen.len(), 1);
        assert_eq!(chosen[0].name(), "Wolf");
    }

    #[test]
    fn test_cheapest_fallback_stacks_until_lower_bound() {
        // A large party scales one rat down to 8, under the window of [9, 9]
        let pool = [monster("Rat", ChallengeRating::ZERO)];
        let search = Search::new(
            &Party::uniform(6, 1),
            &pool,
            XpWindow::new(9, 0.0),
            &BuildOptions::default(),
        );
        assert!(search.working.is_empty());
        let chosen = search.fallback();
        assert_eq!(chosen.len(), 2);
        assert!(chosen.iter().all(|m| m.name() == "Rat"));
    }

    #[test]
    fn test_closest_group_wins_and_ties_keep_the_first() {
        // Orc groups grow through 600, 800, 1000, 1200 inside [540, 1260];
        // 800 and 1000 are both 100 from the budget and 800 comes first
        let pool = [monster("Orc", ChallengeRating::ONE_HALF)];
        let options = BuildOptions {
            target: Target::Xp(900),
            tolerance: 0.4,
            prefer_variety: false,
            ..BuildOptions::default()
        };
        for seed in 0..5 {
            let encounter =
                build_encounter_with_rng(&Party::uniform(4, 5), &pool, &options, &mut seeded(seed))
                    .unwrap();
            assert_eq!(encounter.adjusted_xp(), 800, "seed {seed}");
            assert_eq!(encounter.monsters().len(), 4);
        }
    }

    #[test]
    fn test_closer_group_replaces_earlier_one() {
        // Candidates 800, 1000 and 1200 in [750, 1250]; the exact 1000 wins
        let pool = [monster("Orc", ChallengeRating::ONE_HALF)];
        let options = BuildOptions {
            target: Target::Xp(1000),
            tolerance: 0.25,
            prefer_variety: false,
            ..BuildOptions::default()
        };
        let encounter =
            build_encounter_with_rng(&Party::uniform(4, 5), &pool, &options, &mut seeded(8))
                .unwrap();
        assert_eq!(encounter.adjusted_xp(), 1000);
        assert_eq!(encounter.monsters().len(), 5);
    }

    #[test]
    fn test_overshooting_addition_is_skipped_not_fatal() {
        // A CR 4 monster fits alone in [900, 1100] but overshoots in any
        // group, so five orcs are reachable only by skipping it and going on
        let pool = [
            monster("Orc", ChallengeRating::ONE_HALF),
            monster("Ettin", ChallengeRating::whole(4)),
        ];
        let options = BuildOptions {
            target: Target::Xp(1000),
            tolerance: 0.1,
            prefer_variety: false,
            limits: SearchLimits {
                trials: 1,
                retries: 200,
            },
            ..BuildOptions::default()
        };
        for seed in 0..8 {
            let encounter =
                build_encounter_with_rng(&Party::uniform(4, 5), &pool, &options, &mut seeded(seed))
                    .unwrap();
            assert_eq!(encounter.adjusted_xp(), 1000, "seed {seed}");
            assert_eq!(encounter.monster_counts().get("Orc"), Some(&5));
            assert_eq!(encounter.monsters().len(), 5);
        }
    }

    #[test]
    fn test_cheapest_fallback_respects_max_monsters() {
        // One CR 1 against six level 1 characters is 150, under [180, 180],
        // and the cap stops the stack at one
        let pool = [monster("Bugbear", ChallengeRating::whole(1))];
        let options = BuildOptions {
            target: Target::Xp(180),
            tolerance: 0.0,
            max_monsters: 1,
            ..BuildOptions::default()
        };
        let encounter =
            build_encounter_with_rng(&Party::uniform(6, 1), &pool, &options, &mut seeded(2))
                .unwrap();
        assert_eq!(encounter.monsters().len(), 1);
        assert_eq!(encounter.adjusted_xp(), 150);
        assert!(encounter.adjusted_xp() < encounter.window().lo);
    }

    #[test]
    fn test_variety_bookkeeping_survives_undo() {
        let pool = [
            monster("Bandit", ChallengeRating::ONE_HALF),
            monster("Bandit", ChallengeRating::ONE_HALF),
            monster("Thug", ChallengeRating::ONE_HALF),
        ];
        let search = Search::new(
            &Party::uniform(4, 5),
            &pool,
            XpWindow::new(2000, 0.15),
            &BuildOptions::default(),
        );
        let mut group = search.empty_group();
        assert_eq!(group.fresh, 3);

        search.add(&mut group, 0);
        assert_eq!(group.fresh, 1);
        search.add(&mut group, 1);
        assert_eq!(group.fresh, 1);
        assert_eq!(search.working[search.draw(&group, &mut seeded(1))].name(), "Thug");

        search.undo(&mut group);
        search.undo(&mut group);
        assert_eq!(group.fresh, 3);
        assert_eq!(group.base, 0);
        assert!(group.members.is_empty());
    }

    #[test]
    fn test_zero_budget_is_clamped_for_search_only() {
        let pool = [monster("Rat", ChallengeRating::ZERO)];
        let options = BuildOptions::for_target(Target::Xp(0));
        let encounter =
            build_encounter_with_rng(&Party::uniform(4, 5), &pool, &options, &mut seeded(4))
                .unwrap();
        assert_eq!(encounter.target_budget(), 0);
        assert_eq!(encounter.window().budget, 1);
    }

    #[test]
    fn test_prefer_variety_picks_new_names() {
        let pool = [
            monster("Bandit", ChallengeRating::ONE_HALF),
            monster("Thug", ChallengeRating::ONE_HALF),
        ];
        let options = BuildOptions {
            target: Target::Xp(300),
            tolerance: 0.0,
            max_monsters: 2,
            ..BuildOptions::default()
        };
        for seed in 0..10 {
            let encounter =
                build_encounter_with_rng(&Party::uniform(4, 5), &pool, &options, &mut seeded(seed))
                    .unwrap();
            assert_eq!(encounter.adjusted_xp(), 300);
            assert_eq!(encounter.monster_counts().len(), 2, "seed {seed}");
        }
    }

    #[test]
    fn test_same_seed_same_encounter() {
        let pool = MonsterPool::seed();
        let options = BuildOptions {
            target: Target::Label(Difficulty::Hard),
            seed: Some(42),
            ..BuildOptions::default()
        };
        let party = Party::uniform(4, 5);
        let first = build_from_pool(&party, &pool, &options).unwrap();
        let second = build_from_pool(&party, &pool, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_environment_carried_for_display() {
        let pool = MonsterPool::new(vec![monster("Orc", ChallengeRating::ONE_HALF)]);
        let mut options = medium();
        options.filter = options.filter.with_environment("forest");
        let encounter = build_from_pool(&Party::uniform(4, 5), &pool, &options).unwrap();
        assert_eq!(encounter.environment(), Some("forest"));
    }

    #[test]
    fn test_filter_that_removes_everything_is_empty_pool() {
        let pool = MonsterPool::new(vec![monster("Orc", ChallengeRating::ONE_HALF)]);
        let mut options = medium();
        options.filter = options.filter.with_environment("arctic");
        let result = build_from_pool(&Party::uniform(4, 5), &pool, &options);
        assert_eq!(result, Err(EncounterError::EmptyPool));
    }
}
