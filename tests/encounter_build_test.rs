//! Encounter building integration tests
//!
//! Builds encounters end to end against the built-in monster pool and checks
//! the window, fallback and reproducibility guarantees.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use warband::encounter::XpWindow;
use warband::rules::{adjusted_xp, encounter_multiplier, Difficulty, DifficultyRating};
use warband::{
    build_encounter, build_encounter_with_rng, build_from_pool, BuildOptions, EncounterError,
    Monster, MonsterPool, Party, PoolFilter, SearchLimits, Target,
};

fn ogre() -> Monster {
    Monster::new(
        "Ogre",
        "2".parse().unwrap(),
        "giant",
        vec!["brute".to_string()],
        vec!["hills".to_string()],
    )
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_reference_party_window() {
    let party: Party = "4x5".parse().unwrap();
    let options = BuildOptions {
        seed: Some(3),
        ..BuildOptions::default()
    };
    let encounter = build_from_pool(&party, &MonsterPool::seed(), &options).unwrap();
    let window = encounter.window();
    assert_eq!(window, XpWindow::new(2000, 0.15));
    assert_eq!((window.lo, window.hi), (1700, 2300));
}

#[test]
fn test_single_oversized_monster_still_returned() {
    let party = Party::uniform(4, 1);
    let titan = Monster::new("Titan", "20".parse().unwrap(), "giant", Vec::new(), Vec::new());
    let encounter = build_encounter(&party, &[titan], &BuildOptions::default()).unwrap();
    assert_eq!(encounter.monsters().len(), 1);
    assert_eq!(encounter.monsters()[0].name(), "Titan");
    assert!(encounter.adjusted_xp() > encounter.window().hi);
    assert_eq!(encounter.difficulty(), DifficultyRating::DeadlyPlus);
}

#[test]
fn test_single_monster_pool_without_fit_returns_solo() {
    let party = Party::uniform(4, 5);
    let encounter = build_encounter(&party, &[ogre()], &BuildOptions::default()).unwrap();
    assert_eq!(encounter.monsters().len(), 1);
    assert_eq!(encounter.adjusted_xp(), 450);
}

#[test]
fn test_empty_pool_error() {
    let party = Party::uniform(4, 5);
    let result = build_encounter(&party, &[], &BuildOptions::default());
    assert_eq!(result, Err(EncounterError::EmptyPool));
}

#[test]
fn test_empty_pool_leaves_generator_untouched() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let _ = build_encounter_with_rng(&Party::uniform(4, 5), &[], &BuildOptions::default(), &mut rng);
    assert_eq!(rng.gen::<u64>(), ChaCha8Rng::seed_from_u64(99).gen::<u64>());
}

// ============================================================================
// Invariants over many builds
// ============================================================================

#[test]
fn test_adjusted_matches_multiplier_for_every_build() {
    let pool = MonsterPool::seed();
    let party = Party::uniform(4, 3);
    for seed in 0..20 {
        let options = BuildOptions {
            seed: Some(seed),
            limits: SearchLimits::quick(),
            ..BuildOptions::default()
        };
        let encounter = build_from_pool(&party, &pool, &options).unwrap();
        let expected_multiplier = encounter_multiplier(encounter.monsters().len(), party.size());
        assert_eq!(encounter.multiplier(), expected_multiplier);
        assert_eq!(
            encounter.adjusted_xp(),
            adjusted_xp(encounter.base_xp(), expected_multiplier)
        );
        let base: u64 = encounter.monsters().iter().map(|m| u64::from(m.xp())).sum();
        assert_eq!(encounter.base_xp(), base);
        assert!(encounter.monsters().len() <= options.max_monsters);
    }
}

#[test]
fn test_seed_pool_builds_land_in_window() {
    let pool = MonsterPool::seed();
    for (party, target) in [
        ("4x5", "medium"),
        ("3x1", "easy"),
        ("6x10", "hard"),
        ("5x15", "1.5x deadly"),
    ] {
        let party: Party = party.parse().unwrap();
        let options = BuildOptions {
            target: target.parse().unwrap(),
            seed: Some(7),
            ..BuildOptions::default()
        };
        let encounter = build_from_pool(&party, &pool, &options).unwrap();
        assert!(encounter.in_window(), "{target} for {party} missed the window");
    }
}

#[test]
fn test_max_monsters_respected() {
    let pool = MonsterPool::seed();
    let options = BuildOptions {
        target: Target::Label(Difficulty::Deadly),
        max_monsters: 3,
        seed: Some(12),
        ..BuildOptions::default()
    };
    let encounter = build_from_pool(&Party::uniform(4, 8), &pool, &options).unwrap();
    assert!(encounter.monsters().len() <= 3);
}

#[test]
fn test_same_seed_same_encounter() {
    let pool = MonsterPool::seed();
    let party = Party::uniform(5, 7);
    let options = BuildOptions {
        target: "hard".parse().unwrap(),
        filter: PoolFilter::new().with_environment("forest"),
        seed: Some(2024),
        ..BuildOptions::default()
    };
    let first = build_from_pool(&party, &pool, &options).unwrap();
    let second = build_from_pool(&party, &pool, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_difficulty_uses_party_thresholds_not_scaled_budget() {
    // Twice the deadly budget lands well past deadly for the party
    let pool = MonsterPool::seed();
    let options = BuildOptions {
        target: "2x deadly".parse().unwrap(),
        seed: Some(8),
        ..BuildOptions::default()
    };
    let encounter = build_from_pool(&Party::uniform(4, 5), &pool, &options).unwrap();
    assert_eq!(encounter.window().budget, 8800);
    assert_eq!(encounter.difficulty(), DifficultyRating::DeadlyPlus);
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_encounter_json_shape() {
    let party = Party::uniform(4, 5);
    let options = BuildOptions {
        seed: Some(1),
        ..BuildOptions::default()
    };
    let encounter = build_encounter(&party, &[ogre()], &options).unwrap();
    let json = serde_json::to_value(&encounter).unwrap();
    assert_eq!(json["base"], 450);
    assert_eq!(json["adjusted"], 450);
    assert_eq!(json["difficulty"], "trivial");
    assert_eq!(json["monsters"][0]["name"], "Ogre");
    assert_eq!(json["monsters"][0]["challenge_rating"], "2");
    assert_eq!(json["monsters"][0]["type"], "giant");
    assert_eq!(json["window"]["hi"], 2300);
    assert_eq!(json["target_budget"], 2000);
}
