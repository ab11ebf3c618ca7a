//! Challenge ratings as exact fractions.
//!
//! Ratings below 1 are fractional (1/8, 1/4, 1/2), so they are stored as a
//! reduced `num/den` pair instead of a float. Parsing accepts whole numbers,
//! decimals and fractions: `2`, `0.25`, `1/4`.

use super::tables::{FRACTIONAL_RATING_XP, WHOLE_RATING_XP};
use crate::error::ChallengeRatingError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Longest decimal fraction accepted when parsing ("0.125" has three digits).
const MAX_DECIMAL_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RatingRepr", into = "String")]
pub struct ChallengeRating {
    num: u32,
    den: u32,
}

impl ChallengeRating {
    pub const ZERO: ChallengeRating = ChallengeRating::whole(0);
    pub const ONE_EIGHTH: ChallengeRating = ChallengeRating { num: 1, den: 8 };
    pub const ONE_QUARTER: ChallengeRating = ChallengeRating { num: 1, den: 4 };
    pub const ONE_HALF: ChallengeRating = ChallengeRating { num: 1, den: 2 };

    pub const fn whole(rating: u32) -> Self {
        Self {
            num: rating,
            den: 1,
        }
    }

    /// Builds `num/den` in lowest terms. Returns `None` for a zero denominator.
    pub fn new(num: u32, den: u32) -> Option<Self> {
        Self::reduced(num as u64, den as u64)
    }

    fn reduced(num: u64, den: u64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let divisor = gcd(num, den);
        let num = u32::try_from(num / divisor).ok()?;
        let den = u32::try_from(den / divisor).ok()?;
        Some(Self { num, den })
    }

    pub fn numerator(&self) -> u32 {
        self.num
    }

    pub fn denominator(&self) -> u32 {
        self.den
    }

    pub fn is_whole(&self) -> bool {
        self.den == 1
    }

    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Experience value for this rating; 0 when the rating is not in the table.
    pub fn xp(&self) -> u32 {
        if self.den == 1 {
            return WHOLE_RATING_XP
                .get(self.num as usize)
                .copied()
                .unwrap_or(0);
        }
        if self.num == 1 {
            return FRACTIONAL_RATING_XP
                .iter()
                .find(|(den, _)| *den == self.den)
                .map(|(_, xp)| *xp)
                .unwrap_or(0);
        }
        0
    }

    /// Every rating with an xp entry, lowest first.
    pub fn recognized() -> impl Iterator<Item = ChallengeRating> {
        [Self::ZERO, Self::ONE_EIGHTH, Self::ONE_QUARTER, Self::ONE_HALF]
            .into_iter()
            .chain((1..WHOLE_RATING_XP.len() as u32).map(Self::whole))
    }
}

impl Default for ChallengeRating {
    fn default() -> Self {
        Self::ZERO
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

impl Ord for ChallengeRating {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as u64 * other.den as u64;
        let rhs = other.num as u64 * self.den as u64;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for ChallengeRating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.num, self.den) {
            (n, 1) => write!(f, "{n}"),
            (1, d @ (2 | 4 | 8)) => write!(f, "1/{d}"),
            _ => write!(f, "{:.2}", self.as_f64()),
        }
    }
}

impl FromStr for ChallengeRating {
    type Err = ChallengeRatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ChallengeRatingError(s.to_string());

        if let Some((num, den)) = text.split_once('/') {
            let num: u32 = parse_digits(num.trim()).ok_or_else(invalid)?;
            let den: u32 = parse_digits(den.trim()).ok_or_else(invalid)?;
            return Self::new(num, den).ok_or_else(invalid);
        }

        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        if (whole.is_empty() && fraction.is_empty()) || fraction.len() > MAX_DECIMAL_DIGITS {
            return Err(invalid());
        }
        let whole: u64 = if whole.is_empty() {
            0
        } else {
            parse_digits(whole).ok_or_else(invalid)?
        };
        let (fraction, scale) = if fraction.is_empty() {
            (0, 1)
        } else {
            let digits: u64 = parse_digits(fraction).ok_or_else(invalid)?;
            (digits, 10u64.pow(fraction.len() as u32))
        };
        let num = whole
            .checked_mul(scale)
            .and_then(|n| n.checked_add(fraction))
            .ok_or_else(invalid)?;
        Self::reduced(num, scale).ok_or_else(invalid)
    }
}

/// Parses plain ascii digits, rejecting signs and whitespace that `str::parse` allows.
fn parse_digits<T: FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Ratings arrive from json as either numbers or strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RatingRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<RatingRepr> for ChallengeRating {
    type Error = ChallengeRatingError;

    fn try_from(repr: RatingRepr) -> Result<Self, Self::Error> {
        match repr {
            RatingRepr::Number(value) => value.to_string().parse(),
            RatingRepr::Text(text) => text.parse(),
        }
    }
}

impl From<ChallengeRating> for String {
    fn from(rating: ChallengeRating) -> Self {
        if rating.is_whole() || rating.numerator() == 1 {
            rating.to_string()
        } else {
            format!("{}/{}", rating.numerator(), rating.denominator())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ChallengeRating {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_whole_decimal_and_fraction() {
        assert_eq!(parse("2"), ChallengeRating::whole(2));
        assert_eq!(parse("0.25"), ChallengeRating::ONE_QUARTER);
        assert_eq!(parse("0.125"), ChallengeRating::ONE_EIGHTH);
        assert_eq!(parse("1/2"), ChallengeRating::ONE_HALF);
        assert_eq!(parse(" 3.0 "), ChallengeRating::whole(3));
        assert_eq!(parse(".5"), ChallengeRating::ONE_HALF);
        assert_eq!(parse("2/4"), ChallengeRating::ONE_HALF);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "abc", "-1", "+2", "1/0", "1/", "/4", ".", "1.2.3", "1e3"] {
            assert!(bad.parse::<ChallengeRating>().is_err(), "{bad:?} parsed");
        }
    }

    #[test]
    fn test_xp_lookup() {
        assert_eq!(ChallengeRating::ZERO.xp(), 10);
        assert_eq!(ChallengeRating::ONE_EIGHTH.xp(), 25);
        assert_eq!(ChallengeRating::ONE_QUARTER.xp(), 50);
        assert_eq!(ChallengeRating::ONE_HALF.xp(), 100);
        assert_eq!(ChallengeRating::whole(5).xp(), 1800);
        assert_eq!(ChallengeRating::whole(30).xp(), 155000);
    }

    #[test]
    fn test_unrecognized_rating_is_worth_nothing() {
        assert_eq!(parse("1/3").xp(), 0);
        assert_eq!(parse("0.3").xp(), 0);
        assert_eq!(ChallengeRating::whole(31).xp(), 0);
    }

    #[test]
    fn test_recognized_ratings_ascend_with_non_decreasing_xp() {
        let ratings: Vec<_> = ChallengeRating::recognized().collect();
        assert_eq!(ratings.len(), 34);
        for pair in ratings.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].xp() <= pair[1].xp());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ChallengeRating::ONE_EIGHTH.to_string(), "1/8");
        assert_eq!(ChallengeRating::whole(12).to_string(), "12");
        assert_eq!(parse("1/3").to_string(), "0.33");
        assert_eq!(parse("1.5").to_string(), "1.50");
    }

    #[test]
    fn test_json_accepts_numbers_and_strings() {
        let from_number: ChallengeRating = serde_json::from_str("0.25").unwrap();
        let from_text: ChallengeRating = serde_json::from_str("\"1/4\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"1/4\"");
        assert_eq!(serde_json::to_string(&parse("3/2")).unwrap(), "\"3/2\"");
    }
}
