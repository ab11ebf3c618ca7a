//! Warband - encounter builder for 5e-style tabletop games
//!
//! Turns a party and a difficulty target into a group of monsters whose
//! adjusted experience lands near the budget, and draws lair maps to run
//! them on.

pub mod build_info;
pub mod encounter;
pub mod error;
pub mod lair;
pub mod logging;
pub mod monsters;
pub mod presentation;
pub mod rules;

pub use encounter::{
    build_encounter, build_encounter_with_rng, build_from_pool, BuildOptions, Encounter, Party,
    SearchLimits, Target,
};
pub use error::{ConfigError, EncounterError, ImportError, MapError, PartyError, TargetError};
pub use monsters::{Monster, MonsterPool, PoolFilter};
