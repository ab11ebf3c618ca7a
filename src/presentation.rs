//! Plain text rendering of a built encounter.

use crate::encounter::{Encounter, Party};
use rand::Rng;
use serde::Serialize;

pub const OBJECTIVES: [&str; 5] = [
    "Rescue the captive before round 5.",
    "Protect the NPC while retreating 60 ft.",
    "Stop a ritual; three pillars must be destroyed.",
    "Recover a relic from the battlefield.",
    "Escape across a collapsing bridge.",
];

pub const HAZARDS: [&str; 5] = [
    "Cramped tunnels: large creatures have disadvantage on attacks.",
    "Slick ground: DC 12 Dex save on dash or fall prone.",
    "Low visibility: dim light; Perception at disadvantage.",
    "Arcane static: first spell each round needs DC 10 Con save or fizzles.",
    "Choking spores: DC 12 Con at start of turn or poisoned until end.",
];

/// Flavor lines attached to a rendered encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spice {
    pub objective: &'static str,
    pub hazard: &'static str,
}

impl Spice {
    /// Picks one objective and one hazard uniformly.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            objective: OBJECTIVES[rng.gen_range(0..OBJECTIVES.len())],
            hazard: HAZARDS[rng.gen_range(0..HAZARDS.len())],
        }
    }
}

/// Renders the encounter as the text block printed by `warband build`.
///
/// Monsters are grouped by name and listed alphabetically. The target budget
/// is the one the target resolved to, before any clamping.
pub fn render(encounter: &Encounter, party: &Party, spice: Option<&Spice>) -> String {
    let mut text = String::new();

    text.push_str(&format!(
        "Party: {} PCs (levels: {})\n",
        party.size(),
        party
    ));
    text.push_str(&format!(
        "Environment: {}\n",
        encounter.environment().unwrap_or("any")
    ));
    text.push_str(&format!(
        "Target budget: {} XP\n\n",
        encounter.target_budget()
    ));

    text.push_str("Monsters:\n");
    for (name, count) in encounter.monster_counts() {
        let Some(sample) = encounter.monsters().iter().find(|m| m.name() == name) else {
            continue;
        };
        text.push_str(&format!(
            "  x{} {} (CR {}, {}, {} XP each)\n",
            count,
            name,
            sample.challenge_rating(),
            sample.creature_type(),
            sample.xp()
        ));
    }
    text.push('\n');

    text.push_str(&format!(
        "Base XP: {} | Multiplier: x{:.2} | Adjusted XP: {}\n",
        encounter.base_xp(),
        encounter.multiplier(),
        encounter.adjusted_xp()
    ));
    text.push_str(&format!(
        "Estimated difficulty: {}\n",
        encounter.difficulty()
    ));

    if let Some(spice) = spice {
        text.push_str("\nSpice:\n");
        text.push_str(&format!("  Objective: {}\n", spice.objective));
        text.push_str(&format!("  Hazard: {}\n", spice.hazard));
    }
    text
}
