//! Encounter building: party, budget, options and the combination search.

pub mod budget;
pub mod party;
pub mod sampler;
pub mod types;

pub use budget::Target;
pub use party::Party;
pub use sampler::{build_encounter, build_encounter_with_rng, build_from_pool};
pub use types::{BuildOptions, Encounter, SearchLimits, XpWindow};
