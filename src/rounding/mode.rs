// ============================================================================
// Rounding Mode
// Closed set of rounding disciplines with explicit boundary validation
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding discipline.
///
/// The raw tags (`0..=6`) and the names returned by [`RoundingMode::as_str`]
/// are stable: external layers pass them around as configuration. Anything
/// outside them is rejected with `InvalidRoundingMode` when it is converted,
/// never mapped onto a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum RoundingMode {
    /// Toward zero (truncate)
    #[cfg_attr(feature = "serde", serde(rename = "round_down"))]
    Down = 0,

    /// Away from zero
    #[cfg_attr(feature = "serde", serde(rename = "round_up"))]
    Up = 1,

    /// Nearest neighbour, ties away from zero.
    /// The usual mode for invoices and statements.
    #[cfg_attr(feature = "serde", serde(rename = "round_half_up"))]
    HalfUp = 2,

    /// Nearest neighbour, ties toward zero
    #[cfg_attr(feature = "serde", serde(rename = "round_half_down"))]
    HalfDown = 3,

    /// Nearest neighbour, ties to the even neighbour (banker's rounding)
    #[cfg_attr(feature = "serde", serde(rename = "round_half_even"))]
    HalfEven = 4,

    /// Toward positive infinity
    #[cfg_attr(feature = "serde", serde(rename = "round_ceiling"))]
    Ceiling = 5,

    /// Toward negative infinity
    #[cfg_attr(feature = "serde", serde(rename = "round_floor"))]
    Floor = 6,
}

impl RoundingMode {
    /// Every valid mode, in raw-tag order.
    pub const ALL: [RoundingMode; 7] = [
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
    ];

    /// Stable configuration name of this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundingMode::Down => "round_down",
            RoundingMode::Up => "round_up",
            RoundingMode::HalfUp => "round_half_up",
            RoundingMode::HalfDown => "round_half_down",
            RoundingMode::HalfEven => "round_half_even",
            RoundingMode::Ceiling => "round_ceiling",
            RoundingMode::Floor => "round_floor",
        }
    }

    /// Raw tag of this mode.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Convert a raw tag.
    ///
    /// # Errors
    /// Returns `InvalidRoundingMode` for tags outside `0..=6`.
    pub const fn from_tag(tag: u8) -> NumericResult<Self> {
        match tag {
            0 => Ok(RoundingMode::Down),
            1 => Ok(RoundingMode::Up),
            2 => Ok(RoundingMode::HalfUp),
            3 => Ok(RoundingMode::HalfDown),
            4 => Ok(RoundingMode::HalfEven),
            5 => Ok(RoundingMode::Ceiling),
            6 => Ok(RoundingMode::Floor),
            _ => Err(NumericError::InvalidRoundingMode),
        }
    }
}

/// Validate a mode arriving from outside the type-safe core.
///
/// Accepts a `RoundingMode` (always valid) or anything convertible into one:
/// raw tags and stable names.
#[inline]
pub(crate) fn resolve<M>(mode: M) -> NumericResult<RoundingMode>
where
    M: TryInto<RoundingMode>,
{
    mode.try_into().map_err(|_| NumericError::InvalidRoundingMode)
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = NumericError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_tag(tag)
    }
}

impl TryFrom<i32> for RoundingMode {
    type Error = NumericError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        u8::try_from(tag)
            .map_err(|_| NumericError::InvalidRoundingMode)
            .and_then(Self::from_tag)
    }
}

impl TryFrom<&str> for RoundingMode {
    type Error = NumericError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl FromStr for RoundingMode {
    type Err = NumericError;

    /// Parse a stable mode name. Only the exact lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or(NumericError::InvalidRoundingMode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(RoundingMode::Down.to_string(), "round_down");
        assert_eq!(RoundingMode::Up.to_string(), "round_up");
        assert_eq!(RoundingMode::HalfUp.to_string(), "round_half_up");
        assert_eq!(RoundingMode::HalfDown.to_string(), "round_half_down");
        assert_eq!(RoundingMode::HalfEven.to_string(), "round_half_even");
        assert_eq!(RoundingMode::Ceiling.to_string(), "round_ceiling");
        assert_eq!(RoundingMode::Floor.to_string(), "round_floor");
    }

    #[test]
    fn test_tags_are_stable() {
        for (i, mode) in RoundingMode::ALL.into_iter().enumerate() {
            assert_eq!(mode.tag() as usize, i);
            assert_eq!(RoundingMode::from_tag(i as u8), Ok(mode));
        }
    }

    #[test]
    fn test_invalid_tags_rejected() {
        assert_eq!(RoundingMode::try_from(7u8), Err(NumericError::InvalidRoundingMode));
        assert_eq!(RoundingMode::try_from(99i32), Err(NumericError::InvalidRoundingMode));
        assert_eq!(RoundingMode::try_from(-1i32), Err(NumericError::InvalidRoundingMode));
        assert_eq!(RoundingMode::try_from(4i32), Ok(RoundingMode::HalfEven));
    }

    #[test]
    fn test_parse() {
        assert_eq!("round_half_even".parse::<RoundingMode>(), Ok(RoundingMode::HalfEven));
        assert_eq!("round_floor".parse::<RoundingMode>(), Ok(RoundingMode::Floor));
        assert_eq!(
            "bankers".parse::<RoundingMode>(),
            Err(NumericError::InvalidRoundingMode)
        );
        assert_eq!(RoundingMode::try_from("round_up"), Ok(RoundingMode::Up));
    }

    #[test]
    fn test_parse_rejects_near_miss_names() {
        for name in [" ROUND_FLOOR ", "Round_Half_Even", "round_up ", " round_down", "ROUND_CEILING"] {
            assert_eq!(
                name.parse::<RoundingMode>(),
                Err(NumericError::InvalidRoundingMode),
                "{:?}",
                name
            );
        }
        assert_eq!(resolve("Round_Half_Even"), Err(NumericError::InvalidRoundingMode));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(RoundingMode::Ceiling), Ok(RoundingMode::Ceiling));
        assert_eq!(resolve(2u8), Ok(RoundingMode::HalfUp));
        assert_eq!(resolve(99i32), Err(NumericError::InvalidRoundingMode));
        assert_eq!(resolve("nope"), Err(NumericError::InvalidRoundingMode));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&RoundingMode::HalfEven).unwrap();
        assert_eq!(json, "\"round_half_even\"");
        let mode: RoundingMode = serde_json::from_str("\"round_ceiling\"").unwrap();
        assert_eq!(mode, RoundingMode::Ceiling);
        assert!(serde_json::from_str::<RoundingMode>("\"round_sideways\"").is_err());
    }
}
