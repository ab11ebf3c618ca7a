//! Adventuring party description.

use crate::error::PartyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character levels of the party, in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    levels: Vec<u32>,
}

impl Party {
    pub fn new(levels: Vec<u32>) -> Self {
        Self { levels }
    }

    /// `count` characters all of the same level.
    pub fn uniform(count: usize, level: u32) -> Self {
        Self::new(vec![level; count])
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    pub fn size(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels: Vec<String> = self.levels.iter().map(u32::to_string).collect();
        write!(f, "{}", levels.join(", "))
    }
}

/// Parses `"4x5"`, `"5 5 4"`, `"2x3, 4"` and so on. Tokens are separated
/// by commas or whitespace; `NxL` means N characters of level L.
impl FromStr for Party {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut levels = Vec::new();
        for token in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let invalid = || PartyError::InvalidToken(token.to_string());
            let lowered = token.to_ascii_lowercase();
            match lowered.split_once('x') {
                Some((count, level)) => {
                    let count: usize = count.parse().map_err(|_| invalid())?;
                    let level = parse_level(level).ok_or_else(invalid)?;
                    if count == 0 {
                        return Err(invalid());
                    }
                    levels.extend(std::iter::repeat(level).take(count));
                }
                None => levels.push(parse_level(&lowered).ok_or_else(invalid)?),
            }
        }
        Ok(Self::new(levels))
    }
}

fn parse_level(text: &str) -> Option<u32> {
    text.parse().ok().filter(|&level| level > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<u32> {
        text.parse::<Party>().unwrap().levels().to_vec()
    }

    #[test]
    fn test_parse_multiplied_tokens() {
        assert_eq!(parse("4x5"), [5, 5, 5, 5]);
        assert_eq!(parse("2X3, 4"), [3, 3, 4]);
    }

    #[test]
    fn test_parse_plain_levels_with_mixed_separators() {
        assert_eq!(parse("1, 2 3,,4"), [1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_text_is_empty_party() {
        assert!(parse("   ").is_empty());
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for bad in ["four", "4x", "x5", "2x3x4", "0", "3x0", "0x5", "-2"] {
            assert!(bad.parse::<Party>().is_err(), "{bad:?} parsed");
        }
    }

    #[test]
    fn test_display_lists_levels() {
        assert_eq!(Party::uniform(3, 7).to_string(), "7, 7, 7");
    }
}
