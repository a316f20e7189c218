// SPDX-FileCopyrightText: 2026 duration-string contributors
//
// SPDX-License-Identifier: MIT

use std::time::Duration;

use crate::errors::{Error, Result};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// The time units accepted on the string side of a conversion.  The year is
/// 31 556 926 seconds, a sidereal year, rather than the 365-day calendar
/// approximation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Unit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

impl Unit {
    /// Units ordered largest-first, the order in which formatting probes for
    /// an exact fit.
    pub(crate) const DESCENDING: [Unit; 9] = [
        Unit::Year,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Microsecond,
        Unit::Nanosecond,
    ];

    pub(crate) fn suffix(self) -> &'static str {
        match self {
            Unit::Nanosecond => "ns",
            Unit::Microsecond => "us",
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Year => "y",
        }
    }

    pub(crate) fn nanos(self) -> u128 {
        match self {
            Unit::Nanosecond => 1,
            Unit::Microsecond => 1_000,
            Unit::Millisecond => 1_000_000,
            Unit::Second => NANOS_PER_SEC,
            Unit::Minute => 60 * NANOS_PER_SEC,
            Unit::Hour => 3_600 * NANOS_PER_SEC,
            Unit::Day => 86_400 * NANOS_PER_SEC,
            Unit::Week => 604_800 * NANOS_PER_SEC,
            Unit::Year => 31_556_926 * NANOS_PER_SEC,
        }
    }

    /// A `Duration` of `count` of this unit.  `count * nanos` cannot overflow
    /// a u128, so the only failure is a second count beyond `Duration`'s
    /// 64-bit range.
    pub(crate) fn duration(self, count: u64) -> Result<Duration> {
        let total = u128::from(count) * self.nanos();
        let secs = u64::try_from(total / NANOS_PER_SEC).map_err(|_| Error::Overflow)?;
        let nanos = u32::try_from(total % NANOS_PER_SEC).map_err(|_| Error::Overflow)?;
        Ok(Duration::new(secs, nanos))
    }
}
