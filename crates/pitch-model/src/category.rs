//! Categorical columns with a fixed, non-alphabetical order.
//!
//! Every ordering used for display (tier rank, zone band height) is encoded
//! here as an explicit enumeration. Nothing downstream sorts these as strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a categorical value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} value: {value:?}")]
pub struct ParseCategoryError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseCategoryError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Throwing or batting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hand {
    #[serde(rename = "L", alias = "Left", alias = "left")]
    Left,
    #[serde(rename = "R", alias = "Right", alias = "right")]
    Right,
}

impl Hand {
    /// Single-letter code used by the source tables.
    pub fn code(self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Right => "R",
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Hand {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L" | "l" | "Left" | "left" => Ok(Self::Left),
            "R" | "r" | "Right" | "right" => Ok(Self::Right),
            other => Err(ParseCategoryError::new("hand", other)),
        }
    }
}

/// Velocity tier relative to other pitches of the same pitch type.
///
/// Declaration order is rank order: `S` is the fastest tier, `D` the slowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VelocityTier {
    S,
    A,
    B,
    C,
    D,
}

impl VelocityTier {
    /// All tiers in rank order.
    pub const ALL: [VelocityTier; 5] = [Self::S, Self::A, Self::B, Self::C, Self::D];

    /// Zero-based rank, 0 = `S`.
    pub fn rank(self) -> usize {
        match self {
            Self::S => 0,
            Self::A => 1,
            Self::B => 2,
            Self::C => 3,
            Self::D => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for VelocityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VelocityTier {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(ParseCategoryError::new("velocity tier", other)),
        }
    }
}

/// Vertical zone band. `A` is the lowest band, `E` the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VerticalBand {
    A,
    B,
    C,
    D,
    E,
}

impl VerticalBand {
    /// Display order, top of the zone first.
    pub const TOP_TO_BOTTOM: [VerticalBand; 5] = [Self::E, Self::D, Self::C, Self::B, Self::A];

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            _ => None,
        }
    }
}

/// Horizontal zone band, numbered 1 to 5 from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HorizontalBand {
    H1,
    H2,
    H3,
    H4,
    H5,
}

impl HorizontalBand {
    pub const LEFT_TO_RIGHT: [HorizontalBand; 5] =
        [Self::H1, Self::H2, Self::H3, Self::H4, Self::H5];

    pub fn number(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::H1),
            '2' => Some(Self::H2),
            '3' => Some(Self::H3),
            '4' => Some(Self::H4),
            '5' => Some(Self::H5),
            _ => None,
        }
    }
}

/// Composite zone key: vertical band by horizontal band, written `C3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneId {
    pub vertical: VerticalBand,
    pub horizontal: HorizontalBand,
}

impl ZoneId {
    pub fn new(vertical: VerticalBand, horizontal: HorizontalBand) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.vertical.as_char(), self.horizontal.number())
    }
}

impl FromStr for ZoneId {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(h), None) => VerticalBand::from_char(v.to_ascii_uppercase())
                .zip(HorizontalBand::from_char(h))
                .map(|(v, h)| ZoneId::new(v, h)),
            _ => None,
        };
        parsed.ok_or_else(|| ParseCategoryError::new("zone id", trimmed))
    }
}

impl TryFrom<String> for ZoneId {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ZoneId> for String {
    fn from(value: ZoneId) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_rank_is_not_alphabetical() {
        let mut tiers = vec![VelocityTier::D, VelocityTier::A, VelocityTier::S, VelocityTier::C];
        tiers.sort();
        assert_eq!(
            tiers,
            vec![VelocityTier::S, VelocityTier::A, VelocityTier::C, VelocityTier::D]
        );
        assert_eq!(VelocityTier::S.rank(), 0);
        assert_eq!(VelocityTier::D.rank(), 4);
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("B".parse::<VelocityTier>(), Ok(VelocityTier::B));
        assert!("F".parse::<VelocityTier>().is_err());
    }

    #[test]
    fn test_hand_serde_uses_codes() {
        let json = serde_json::to_string(&Hand::Left).unwrap();
        assert_eq!(json, "\"L\"");
        let parsed: Hand = serde_json::from_str("\"Right\"").unwrap();
        assert_eq!(parsed, Hand::Right);
    }

    #[test]
    fn test_zone_id_parse_and_display() {
        let zone: ZoneId = "C3".parse().unwrap();
        assert_eq!(zone.vertical, VerticalBand::C);
        assert_eq!(zone.horizontal, HorizontalBand::H3);
        assert_eq!(zone.to_string(), "C3");
        assert_eq!("e5".parse::<ZoneId>().unwrap().to_string(), "E5");
    }

    #[test]
    fn test_zone_id_rejects_garbage() {
        for bad in ["", "C", "C6", "F1", "C33", "3C"] {
            assert!(bad.parse::<ZoneId>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_zone_id_serde_as_string() {
        let zone = ZoneId::new(VerticalBand::B, HorizontalBand::H4);
        let json = serde_json::to_string(&zone).unwrap();
        assert_eq!(json, "\"B4\"");
        let parsed: ZoneId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, zone);
    }

    #[test]
    fn test_display_order_puts_highest_band_first() {
        assert_eq!(VerticalBand::TOP_TO_BOTTOM[0], VerticalBand::E);
        assert_eq!(VerticalBand::TOP_TO_BOTTOM[4], VerticalBand::A);
    }

    proptest::proptest! {
        #[test]
        fn zone_id_parse_accepts_only_band_pairs(input in "[A-Ga-g0-7]{0,3}") {
            let upper = input.to_ascii_uppercase();
            let bytes = upper.as_bytes();
            let valid = bytes.len() == 2
                && (b'A'..=b'E').contains(&bytes[0])
                && (b'1'..=b'5').contains(&bytes[1]);

            match input.parse::<ZoneId>() {
                Ok(zone) => {
                    proptest::prop_assert!(valid);
                    proptest::prop_assert_eq!(zone.to_string(), upper);
                }
                Err(_) => proptest::prop_assert!(!valid),
            }
        }
    }
}
