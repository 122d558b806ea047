use core::str::FromStr;

use derive_more::Display;
use thiserror::Error;

/// One of the five fields of a [`Duration`](crate::time::Duration).
///
/// The variants are ordered from the smallest to the largest unit, so
/// `Unit::Milliseconds < Unit::Days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Unit {
    #[display("milliseconds")]
    Milliseconds,
    #[display("seconds")]
    Seconds,
    #[display("minutes")]
    Minutes,
    #[display("hours")]
    Hours,
    #[display("days")]
    Days,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Self; 5] = [
        Self::Milliseconds,
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
    ];

    /// The inclusive upper bound of the field.
    ///
    /// Days are not bounded by the duration itself, only by the width of
    /// the field.
    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            Self::Milliseconds => 999,
            Self::Seconds => 59,
            Self::Minutes => 59,
            Self::Hours => 23,
            Self::Days => u32::MAX,
        }
    }

    /// The unit an overflow of this unit carries into.
    #[must_use]
    pub const fn larger(self) -> Option<Self> {
        match self {
            Self::Milliseconds => Some(Self::Seconds),
            Self::Seconds => Some(Self::Minutes),
            Self::Minutes => Some(Self::Hours),
            Self::Hours => Some(Self::Days),
            Self::Days => None,
        }
    }

    /// How many milliseconds one step of this unit is worth.
    #[must_use]
    pub const fn as_milliseconds(self) -> u64 {
        match self {
            Self::Milliseconds => 1,
            Self::Seconds => 1000,
            Self::Minutes => 60 * 1000,
            Self::Hours => 60 * 60 * 1000,
            Self::Days => 24 * 60 * 60 * 1000,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown unit \"{0}\", expected one of: days, hours, minutes, seconds, milliseconds")]
pub struct ParseUnitError(String);

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim().to_ascii_lowercase().as_str() {
            "ms" | "millisecond" | "milliseconds" => Ok(Self::Milliseconds),
            "s" | "second" | "seconds" => Ok(Self::Seconds),
            "m" | "min" | "minute" | "minutes" => Ok(Self::Minutes),
            "h" | "hour" | "hours" => Ok(Self::Hours),
            "d" | "day" | "days" => Ok(Self::Days),
            _ => Err(ParseUnitError(string.to_string())),
        }
    }
}
