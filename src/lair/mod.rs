//! Procedural lair maps to run an encounter on.

pub mod generation;
pub mod types;

pub use generation::{generate_lair_map, generate_lair_map_with_rng, render_ascii};
pub use types::{LairMap, LairMapOptions, Room, Tile};
