//! Turning a requested difficulty into an xp budget.

use crate::error::TargetError;
use crate::rules::{party_threshold, Difficulty};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the encounter should aim for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TargetRepr", into = "String")]
pub enum Target {
    /// The party's summed threshold for a difficulty.
    Label(Difficulty),
    /// A difficulty threshold scaled by a factor, e.g. `1.2x hard`.
    ///
    /// Parsing rejects negative or non-finite factors such as `-1x hard`
    /// with [`TargetError::InvalidFactor`] instead of clamping them.
    Scaled(Difficulty, f64),
    /// A fixed adjusted xp value.
    Xp(u64),
}

impl Default for Target {
    fn default() -> Self {
        Target::Label(Difficulty::Medium)
    }
}

impl Target {
    /// Resolves the target to an xp budget for a party with these levels.
    ///
    /// Scaled budgets are truncated toward zero.
    pub fn budget(&self, levels: &[u32]) -> u64 {
        match *self {
            Target::Label(difficulty) => party_threshold(levels, difficulty),
            Target::Scaled(difficulty, factor) => {
                (party_threshold(levels, difficulty) as f64 * factor) as u64
            }
            Target::Xp(xp) => xp,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Label(difficulty) => write!(f, "{difficulty}"),
            Target::Scaled(difficulty, factor) => write!(f, "{factor}x {difficulty}"),
            Target::Xp(xp) => write!(f, "{xp}"),
        }
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        if let Ok(xp) = text.parse::<u64>() {
            return Ok(Target::Xp(xp));
        }
        if let Ok(difficulty) = text.parse::<Difficulty>() {
            return Ok(Target::Label(difficulty));
        }

        let difficulty = Difficulty::ALL
            .into_iter()
            .find(|d| text.contains(label(d)))
            .ok_or_else(|| TargetError::UnknownLabel(s.to_string()))?;

        // Whatever surrounds the label, minus any 'x', is the factor
        let factor_text = text.replace(label(&difficulty), "").replace('x', "");
        let factor_text = factor_text.trim();
        if factor_text.is_empty() {
            return Ok(Target::Label(difficulty));
        }
        let invalid = || TargetError::InvalidFactor {
            target: s.to_string(),
            factor: factor_text.to_string(),
        };
        let factor: f64 = factor_text.parse().map_err(|_| invalid())?;
        if !factor.is_finite() || factor < 0.0 {
            return Err(invalid());
        }
        Ok(Target::Scaled(difficulty, factor))
    }
}

fn label(difficulty: &Difficulty) -> &str {
    difficulty.as_ref()
}

/// Targets come from json as either a number or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum TargetRepr {
    Xp(u64),
    Text(String),
}

impl TryFrom<TargetRepr> for Target {
    type Error = TargetError;

    fn try_from(repr: TargetRepr) -> Result<Self, Self::Error> {
        match repr {
            TargetRepr::Xp(xp) => Ok(Target::Xp(xp)),
            TargetRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        target.to_string()
    }
}
