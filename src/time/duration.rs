use core::num::ParseIntError;
use core::str::FromStr;

use derive_more::Display;
use log::warn;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::time::Unit;
use crate::utils::{self, StrExt};

/// An elapsed amount of time, split into days, hours, minutes, seconds and
/// milliseconds.
///
/// Every field except `days` stays within its natural range (see
/// [`Unit::max`]); arithmetic carries overflows into the next larger field.
/// The field order makes the derived ordering compare by elapsed time.
#[derive(Debug, Copy, Clone, Default, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(
    "{}-{:02}:{:02}:{:02}:{:04}",
    days,
    hours,
    minutes,
    seconds,
    milliseconds
)]
pub struct Duration {
    days: u32,
    hours: u8,
    minutes: u8,
    seconds: u8,
    milliseconds: u16,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("{value} is not a valid amount of {unit}, the maximum is {max}")]
    InvalidArgument { unit: Unit, value: u32, max: u32 },
    #[error("can not decrement {unit}, there is nothing left to borrow from")]
    Underflow { unit: Unit },
    #[error("buffer with a capacity of {capacity} bytes is too small, {required} bytes are required")]
    BufferTooSmall { required: usize, capacity: usize },
    #[error("{milliseconds}ms exceed the largest representable duration")]
    Overflow { milliseconds: u64 },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseDurationError {
    #[error("\"{input}\" does not match `D-HH:MM:SS:MMMM` or `HH:MM:SS`")]
    InvalidFormat { input: String },
    #[error("invalid number in duration: {0}")]
    InvalidNumber(#[from] ParseIntError),
    #[error(transparent)]
    OutOfRange(#[from] DurationError),
}

const MILLISECONDS_PER_DAY: u64 = Unit::Days.as_milliseconds();

impl Duration {
    pub const ZERO: Self = Self::new();

    /// The largest duration that can be represented.
    pub const MAX: Self = Self {
        days: u32::MAX,
        hours: Unit::Hours.max() as u8,
        minutes: Unit::Minutes.max() as u8,
        seconds: Unit::Seconds.max() as u8,
        milliseconds: Unit::Milliseconds.max() as u16,
    };

    /// Creates a duration where every field is zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            milliseconds: 0,
        }
    }

    /// Creates a duration from its fields, rejecting fields that are out of
    /// range.
    pub const fn new_checked(
        days: u32,
        hours: u8,
        minutes: u8,
        seconds: u8,
        milliseconds: u16,
    ) -> Result<Self, DurationError> {
        // the checks are spelled out, because `?` is not allowed in a const fn
        let fields = [
            (Unit::Hours, hours as u32),
            (Unit::Minutes, minutes as u32),
            (Unit::Seconds, seconds as u32),
            (Unit::Milliseconds, milliseconds as u32),
        ];

        let mut i = 0;
        while i < fields.len() {
            let (unit, value) = fields[i];
            if value > unit.max() {
                return Err(DurationError::InvalidArgument {
                    unit,
                    value,
                    max: unit.max(),
                });
            }
            i += 1;
        }

        Ok(Self {
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
        })
    }

    /// Sets every field back to zero.
    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.milliseconds == 0
    }

    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    #[must_use]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    #[must_use]
    pub const fn milliseconds(&self) -> u16 {
        self.milliseconds
    }

    /// Returns the value of the field for `unit`.
    #[must_use]
    pub const fn get(&self, unit: Unit) -> u32 {
        match unit {
            Unit::Milliseconds => self.milliseconds as u32,
            Unit::Seconds => self.seconds as u32,
            Unit::Minutes => self.minutes as u32,
            Unit::Hours => self.hours as u32,
            Unit::Days => self.days,
        }
    }

    /// Stores `value` in the field without checking its range, the caller has
    /// to make sure that `value <= unit.max()`.
    fn put(&mut self, unit: Unit, value: u32) {
        debug_assert!(value <= unit.max(), "{} is too large for {}", value, unit);

        match unit {
            Unit::Milliseconds => self.milliseconds = value as u16,
            Unit::Seconds => self.seconds = value as u8,
            Unit::Minutes => self.minutes = value as u8,
            Unit::Hours => self.hours = value as u8,
            Unit::Days => self.days = value,
        }
    }

    /// Sets the field for `unit`. Fails without changing anything if `value`
    /// is larger than [`Unit::max`].
    pub fn set(&mut self, unit: Unit, value: u32) -> Result<(), DurationError> {
        if value > unit.max() {
            return Err(DurationError::InvalidArgument {
                unit,
                value,
                max: unit.max(),
            });
        }

        self.put(unit, value);
        Ok(())
    }

    pub fn set_days(&mut self, days: u32) {
        self.days = days;
    }

    pub fn set_hours(&mut self, hours: u8) -> Result<(), DurationError> {
        self.set(Unit::Hours, hours as u32)
    }

    pub fn set_minutes(&mut self, minutes: u8) -> Result<(), DurationError> {
        self.set(Unit::Minutes, minutes as u32)
    }

    pub fn set_seconds(&mut self, seconds: u8) -> Result<(), DurationError> {
        self.set(Unit::Seconds, seconds as u32)
    }

    pub fn set_milliseconds(&mut self, milliseconds: u16) -> Result<(), DurationError> {
        self.set(Unit::Milliseconds, milliseconds as u32)
    }

    fn add_days_saturating(&mut self, days: u64) {
        match u32::try_from(self.days as u64 + days) {
            Ok(days) => self.days = days,
            Err(_) => {
                warn!(
                    "day count saturated: {} + {} exceeds {}",
                    self.days,
                    days,
                    u32::MAX
                );
                self.days = u32::MAX;
            }
        }
    }

    /// Adds one to the field for `unit`.
    ///
    /// A field that would exceed its maximum wraps to zero and the next
    /// larger field is incremented instead. Days saturate at `u32::MAX`.
    pub fn increment(&mut self, unit: Unit) {
        self.add(unit, 1);
    }

    /// Subtracts one from the field for `unit`.
    ///
    /// A field that is already zero wraps to its maximum and borrows from the
    /// next larger field. If no larger field (including `unit` itself) is
    /// non-zero, this fails with [`DurationError::Underflow`] and the duration
    /// is left untouched.
    pub fn decrement(&mut self, unit: Unit) -> Result<(), DurationError> {
        let lender = Unit::ALL
            .into_iter()
            .filter(|candidate| *candidate >= unit)
            .find(|candidate| self.get(*candidate) != 0)
            .ok_or(DurationError::Underflow { unit })?;

        for borrower in Unit::ALL
            .into_iter()
            .filter(|candidate| *candidate >= unit && *candidate < lender)
        {
            self.put(borrower, borrower.max());
        }

        self.put(lender, self.get(lender) - 1);
        Ok(())
    }

    /// Adds `amount` to the field for `unit`, carrying everything that does not
    /// fit into the larger fields. Days saturate at `u32::MAX`.
    pub fn add(&mut self, unit: Unit, amount: u32) {
        let mut unit = unit;
        let mut carry = amount as u64;

        while carry != 0 {
            let Some(larger) = unit.larger() else {
                self.add_days_saturating(carry);
                return;
            };

            let (value, next_carry) =
                utils::carrying_add(self.get(unit) as u64, carry, unit.max() as u64 + 1);

            // value < modulus <= u32::MAX
            self.put(unit, value as u32);
            carry = next_carry;
            unit = larger;
        }
    }

    pub fn increment_days(&mut self) {
        self.increment(Unit::Days);
    }

    pub fn increment_hours(&mut self) {
        self.increment(Unit::Hours);
    }

    pub fn increment_minutes(&mut self) {
        self.increment(Unit::Minutes);
    }

    pub fn increment_seconds(&mut self) {
        self.increment(Unit::Seconds);
    }

    pub fn increment_milliseconds(&mut self) {
        self.increment(Unit::Milliseconds);
    }

    pub fn decrement_days(&mut self) -> Result<(), DurationError> {
        self.decrement(Unit::Days)
    }

    pub fn decrement_hours(&mut self) -> Result<(), DurationError> {
        self.decrement(Unit::Hours)
    }

    pub fn decrement_minutes(&mut self) -> Result<(), DurationError> {
        self.decrement(Unit::Minutes)
    }

    pub fn decrement_seconds(&mut self) -> Result<(), DurationError> {
        self.decrement(Unit::Seconds)
    }

    pub fn decrement_milliseconds(&mut self) -> Result<(), DurationError> {
        self.decrement(Unit::Milliseconds)
    }

    pub fn add_days(&mut self, amount: u32) {
        self.add(Unit::Days, amount);
    }

    pub fn add_hours(&mut self, amount: u32) {
        self.add(Unit::Hours, amount);
    }

    pub fn add_minutes(&mut self, amount: u32) {
        self.add(Unit::Minutes, amount);
    }

    pub fn add_seconds(&mut self, amount: u32) {
        self.add(Unit::Seconds, amount);
    }

    pub fn add_milliseconds(&mut self, amount: u32) {
        self.add(Unit::Milliseconds, amount);
    }

    /// Splits a number of milliseconds into the five fields.
    ///
    /// `u32::MAX` milliseconds are less than 50 days, so this can not fail.
    #[must_use]
    pub const fn from_milliseconds(total: u32) -> Self {
        let total = total as u64;

        Self {
            days: (total / MILLISECONDS_PER_DAY) as u32,
            hours: ((total / Unit::Hours.as_milliseconds()) % 24) as u8,
            minutes: ((total / Unit::Minutes.as_milliseconds()) % 60) as u8,
            seconds: ((total / Unit::Seconds.as_milliseconds()) % 60) as u8,
            milliseconds: (total % 1000) as u16,
        }
    }

    /// Like [`Duration::from_milliseconds`], but accepts counts that do not
    /// fit into a `u32`. Fails if the number of days would not fit.
    pub fn try_from_milliseconds(total: u64) -> Result<Self, DurationError> {
        let days = u32::try_from(total / MILLISECONDS_PER_DAY)
            .map_err(|_| DurationError::Overflow {
                milliseconds: total,
            })?;

        // the remainder is below one day, which fits into a u32
        let mut result = Self::from_milliseconds((total % MILLISECONDS_PER_DAY) as u32);
        result.days = days;

        Ok(result)
    }

    /// Overwrites all fields with the decomposition of `total` milliseconds.
    pub fn set_from_milliseconds(&mut self, total: u32) {
        *self = Self::from_milliseconds(total);
    }

    /// The total number of milliseconds, the inverse of
    /// [`Duration::from_milliseconds`].
    ///
    /// Even [`Duration::MAX`] fits into a `u64`.
    #[must_use]
    pub const fn as_milliseconds(&self) -> u64 {
        (((self.days as u64 * 24 + self.hours as u64) * 60 + self.minutes as u64) * 60
            + self.seconds as u64)
            * 1000
            + self.milliseconds as u64
    }
}

impl From<Duration> for std::time::Duration {
    fn from(duration: Duration) -> Self {
        std::time::Duration::from_millis(duration.as_milliseconds())
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationError;

    /// Sub-millisecond precision is truncated.
    fn try_from(duration: std::time::Duration) -> Result<Self, Self::Error> {
        let milliseconds = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);

        Self::try_from_milliseconds(milliseconds)
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let invalid_format = || ParseDurationError::InvalidFormat {
            input: string.to_string(),
        };

        let (days, clock) = match string.split_once('-') {
            Some((days, clock)) => (Some(days), clock),
            None => (None, string),
        };

        let (hours, minutes, seconds, milliseconds) = match (days, clock.split_exact::<4>(":")) {
            (Some(_), [Some(hours), Some(minutes), Some(seconds), Some(milliseconds)]) => {
                (hours, minutes, seconds, Some(milliseconds))
            }
            (None, [Some(hours), Some(minutes), Some(seconds), None]) => {
                (hours, minutes, seconds, None)
            }
            _ => return Err(invalid_format()),
        };

        // `u8::from_str` would also accept a leading `+`
        let fields = [days, Some(hours), Some(minutes), Some(seconds), milliseconds];
        if fields
            .iter()
            .flatten()
            .any(|field| field.is_empty() || !field.bytes().all(|byte| byte.is_ascii_digit()))
        {
            return Err(invalid_format());
        }

        let mut result = Self::new();
        result.set_days(days.map_or(Ok(0), str::parse::<u32>)?);
        result.set(Unit::Hours, hours.parse()?)?;
        result.set(Unit::Minutes, minutes.parse()?)?;
        result.set(Unit::Seconds, seconds.parse()?)?;
        result.set(Unit::Milliseconds, milliseconds.map_or(Ok(0), str::parse::<u32>)?)?;

        Ok(result)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::duration;

    fn fields(duration: &Duration) -> (u32, u8, u8, u8, u16) {
        (
            duration.days(),
            duration.hours(),
            duration.minutes(),
            duration.seconds(),
            duration.milliseconds(),
        )
    }

    #[test]
    fn test_new_is_zero() {
        assert_eq!(fields(&Duration::new()), (0, 0, 0, 0, 0));
        assert_eq!(Duration::default(), Duration::ZERO);
        assert!(Duration::ZERO.is_zero());

        let mut duration = duration!(3 - 04:05:06:0007);
        assert!(!duration.is_zero());
        duration.reset();
        assert_eq!(duration, Duration::ZERO);
    }

    #[test]
    fn test_new_checked() {
        assert_eq!(
            Duration::new_checked(1, 23, 59, 59, 999).map(|d| fields(&d)),
            Ok((1, 23, 59, 59, 999))
        );
        assert_eq!(
            Duration::new_checked(0, 0, 60, 0, 0),
            Err(DurationError::InvalidArgument {
                unit: Unit::Minutes,
                value: 60,
                max: 59,
            })
        );
        assert_eq!(
            Duration::new_checked(0, 0, 0, 0, 1000),
            Err(DurationError::InvalidArgument {
                unit: Unit::Milliseconds,
                value: 1000,
                max: 999,
            })
        );
    }

    #[test]
    fn test_increment_carries_seconds_into_minutes() {
        let mut duration = duration!(00:00:59);
        duration.increment_seconds();
        assert_eq!(fields(&duration), (0, 0, 1, 0, 0));
    }

    #[test]
    fn test_increment_full_cascade() {
        let mut duration = duration!(23:59:59);
        duration.increment_seconds();
        assert_eq!(fields(&duration), (1, 0, 0, 0, 0));

        let mut duration = duration!(6 - 23:59:59:0999);
        duration.increment_milliseconds();
        assert_eq!(fields(&duration), (7, 0, 0, 0, 0));
    }

    #[test]
    fn test_increment_without_carry() {
        let mut duration = duration!(1 - 10:20:30:0400);
        duration.increment_hours();
        duration.increment_minutes();
        duration.increment_milliseconds();
        duration.increment_days();
        assert_eq!(fields(&duration), (2, 11, 21, 30, 401));
    }

    #[test]
    fn test_increment_days_saturates() {
        let mut duration = Duration::MAX;
        duration.increment_days();
        assert_eq!(duration, Duration::MAX);

        duration.increment_milliseconds();
        assert_eq!(fields(&duration), (u32::MAX, 0, 0, 0, 0));
    }

    #[test]
    fn test_decrement_days_at_zero_fails() {
        let mut duration = Duration::new();
        assert_eq!(
            duration.decrement_days(),
            Err(DurationError::Underflow { unit: Unit::Days })
        );
        assert_eq!(duration, Duration::ZERO);
    }

    #[test]
    fn test_decrement_days_does_not_borrow() {
        let mut duration = duration!(0 - 23:59:59:0999);
        assert_eq!(
            duration.decrement_days(),
            Err(DurationError::Underflow { unit: Unit::Days })
        );
        assert_eq!(duration, duration!(0 - 23:59:59:0999));
    }

    #[test]
    fn test_decrement_borrows_from_days() {
        let mut duration = duration!(2 - 00:00:00:0000);
        duration.decrement_hours().unwrap();
        assert_eq!(fields(&duration), (1, 23, 0, 0, 0));
    }

    #[test]
    fn test_decrement_cascade() {
        let mut duration = duration!(1 - 00:00:00:0000);
        duration.decrement_milliseconds().unwrap();
        assert_eq!(fields(&duration), (0, 23, 59, 59, 999));

        let mut duration = duration!(0 - 01:00:00:0500);
        duration.decrement_seconds().unwrap();
        assert_eq!(fields(&duration), (0, 0, 59, 59, 500));
    }

    #[test]
    fn test_decrement_failure_is_atomic() {
        // only a smaller field is non-zero, so there is nothing to borrow from
        let mut duration = duration!(0 - 00:00:00:0250);
        assert_eq!(
            duration.decrement_minutes(),
            Err(DurationError::Underflow {
                unit: Unit::Minutes
            })
        );
        assert_eq!(fields(&duration), (0, 0, 0, 0, 250));
    }

    #[test]
    fn test_add_carries() {
        let mut duration = Duration::new();
        duration.add_minutes(150);
        assert_eq!(fields(&duration), (0, 2, 30, 0, 0));

        let mut duration = duration!(0 - 23:00:00:0000);
        duration.add_hours(25);
        assert_eq!(fields(&duration), (2, 0, 0, 0, 0));

        let mut duration = duration!(0 - 00:00:59:0999);
        duration.add_milliseconds(1);
        assert_eq!(fields(&duration), (0, 0, 1, 0, 0));

        let mut duration = duration!(0 - 00:00:30:0000);
        duration.add_seconds(30);
        assert_eq!(fields(&duration), (0, 0, 1, 0, 0));
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut duration = duration!(4 - 05:06:07:0008);
        for unit in Unit::ALL {
            duration.add(unit, 0);
        }
        assert_eq!(duration, duration!(4 - 05:06:07:0008));
    }

    #[test]
    fn test_add_matches_millisecond_arithmetic() {
        let start = duration!(3 - 22:58:57:0996);

        for unit in Unit::ALL {
            for amount in [1, 59, 60, 999, 1000, 86_399, 123_456_789] {
                let mut duration = start;
                duration.add(unit, amount);

                let expected = start.as_milliseconds() + amount as u64 * unit.as_milliseconds();
                assert_eq!(
                    duration.as_milliseconds(),
                    expected,
                    "adding {} {} to {}",
                    amount,
                    unit,
                    start
                );
            }
        }
    }

    #[test]
    fn test_add_days_saturates() {
        let mut duration = duration!(4_000_000_000 - 00:00:00:0000);
        duration.add_days(u32::MAX);
        assert_eq!(duration.days(), u32::MAX);

        let mut duration = Duration::MAX;
        duration.add_milliseconds(u32::MAX);
        assert_eq!(duration.days(), u32::MAX);
    }

    #[test]
    fn test_setters() {
        let mut duration = Duration::new();

        assert_eq!(
            duration.set_hours(24),
            Err(DurationError::InvalidArgument {
                unit: Unit::Hours,
                value: 24,
                max: 23,
            })
        );
        assert_eq!(duration.hours(), 0);

        assert_eq!(duration.set_hours(23), Ok(()));
        assert_eq!(duration.hours(), 23);

        assert!(duration.set_minutes(60).is_err());
        assert!(duration.set_seconds(60).is_err());
        assert!(duration.set_milliseconds(1000).is_err());
        assert_eq!(duration.set_minutes(59), Ok(()));
        assert_eq!(duration.set_seconds(58), Ok(()));
        assert_eq!(duration.set_milliseconds(999), Ok(()));

        duration.set_days(u32::MAX);
        assert_eq!(fields(&duration), (u32::MAX, 23, 59, 58, 999));
        assert_eq!(duration.get(Unit::Seconds), 58);
    }

    #[test]
    fn test_from_milliseconds() {
        assert_eq!(
            fields(&Duration::from_milliseconds(90_061_500)),
            (1, 1, 1, 1, 500)
        );
        assert_eq!(Duration::from_milliseconds(0), Duration::ZERO);
        assert_eq!(
            fields(&Duration::from_milliseconds(u32::MAX)),
            (49, 17, 2, 47, 295)
        );

        let mut duration = duration!(9 - 09:09:09:0009);
        duration.set_from_milliseconds(1_500);
        assert_eq!(fields(&duration), (0, 0, 0, 1, 500));
    }

    #[test]
    fn test_try_from_milliseconds() {
        assert_eq!(
            Duration::try_from_milliseconds(Duration::MAX.as_milliseconds()),
            Ok(Duration::MAX)
        );
        assert_eq!(
            Duration::try_from_milliseconds(Duration::MAX.as_milliseconds() + 1),
            Err(DurationError::Overflow {
                milliseconds: Duration::MAX.as_milliseconds() + 1
            })
        );
    }

    #[test]
    fn test_as_milliseconds() {
        assert_eq!(duration!(1 - 01:01:01:0500).as_milliseconds(), 90_061_500);
        assert_eq!(
            Duration::MAX.as_milliseconds(),
            (u32::MAX as u64 + 1) * MILLISECONDS_PER_DAY - 1
        );
    }

    #[test]
    fn test_ordering() {
        assert!(duration!(1 - 00:00:00:0000) > duration!(0 - 23:59:59:0999));
        assert!(duration!(00:01:00) > duration!(00:00:59));
        assert!(Duration::ZERO < duration!(0 - 00:00:00:0001));
    }

    #[test]
    fn test_std_duration() {
        let duration = duration!(1 - 01:01:01:0500);
        let std_duration: std::time::Duration = duration.into();
        assert_eq!(std_duration, std::time::Duration::from_millis(90_061_500));

        assert_eq!(
            Duration::try_from(std::time::Duration::from_micros(90_061_500_999)),
            Ok(duration)
        );
        assert!(Duration::try_from(std::time::Duration::MAX).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("5-03:07:09:0042".parse(), Ok(duration!(5 - 03:07:09:0042)));
        assert_eq!("03:07:09".parse(), Ok(duration!(03:07:09)));
        assert_eq!("0-00:00:00:999".parse(), Ok(duration!(0 - 00:00:00:0999)));

        assert_eq!(
            "03:07".parse::<Duration>(),
            Err(ParseDurationError::InvalidFormat {
                input: "03:07".to_string()
            })
        );
        assert_eq!(
            "1-03:07:09".parse::<Duration>(),
            Err(ParseDurationError::InvalidFormat {
                input: "1-03:07:09".to_string()
            })
        );
        assert_eq!(
            "03:07:09:0042".parse::<Duration>(),
            Err(ParseDurationError::InvalidFormat {
                input: "03:07:09:0042".to_string()
            })
        );
        assert_eq!(
            "+1-03:07:09:0042".parse::<Duration>(),
            Err(ParseDurationError::InvalidFormat {
                input: "+1-03:07:09:0042".to_string()
            })
        );
        assert_eq!(
            "24:00:00".parse::<Duration>(),
            Err(ParseDurationError::OutOfRange(
                DurationError::InvalidArgument {
                    unit: Unit::Hours,
                    value: 24,
                    max: 23,
                }
            ))
        );
        assert!(matches!(
            "99999999999-00:00:00:0000".parse::<Duration>(),
            Err(ParseDurationError::InvalidNumber(_))
        ));
    }
}
