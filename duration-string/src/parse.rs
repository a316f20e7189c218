// SPDX-FileCopyrightText: 2026 duration-string contributors
//
// SPDX-License-Identifier: MIT

use std::time::Duration;

use winnow::ascii::digit1;
use winnow::combinator::{alt, repeat, trace};
use winnow::token::literal;
use winnow::{ModalResult, Parser};

use crate::errors::{Error, Result};
use crate::unit::Unit;

/// Parses a duration string such as `5m 30s` into a `Duration`.
///
/// Whitespace is insignificant anywhere in the input; it is stripped before
/// the scanner runs.  The remainder must be entirely consumed by one or more
/// `[0-9]+(ns|us|ms|[smhdwy])` groups, which accumulate by checked addition.
pub(crate) fn parse(input: &str) -> Result<Duration> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let groups = scan.parse(cleaned.as_str()).map_err(|_| Error::Format)?;

    let mut total = Duration::ZERO;
    for (digits, unit) in groups {
        let count = digits.parse::<u64>()?;
        total = total
            .checked_add(unit.duration(count)?)
            .ok_or(Error::Overflow)?;
    }
    Ok(total)
}

fn scan<'i>(input: &mut &'i str) -> ModalResult<Vec<(&'i str, Unit)>> {
    repeat(1.., group).parse_next(input)
}

fn group<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Unit)> {
    trace("group", (digit1, unit_suffix)).parse_next(input)
}

fn unit_suffix(input: &mut &str) -> ModalResult<Unit> {
    // two-letter suffixes must be tried before the bare "s" and "m"
    trace(
        "unit_suffix",
        alt((
            literal("ns").value(Unit::Nanosecond),
            literal("us").value(Unit::Microsecond),
            literal("ms").value(Unit::Millisecond),
            literal("s").value(Unit::Second),
            literal("m").value(Unit::Minute),
            literal("h").value(Unit::Hour),
            literal("d").value(Unit::Day),
            literal("w").value(Unit::Week),
            literal("y").value(Unit::Year),
        )),
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::errors::Error;

    use super::parse;

    fn assert_parses(input: &str, expected: Duration) {
        assert_eq!(parse(input), Ok(expected), "input was {input:?}");
    }

    #[test]
    fn single_group_each_unit() {
        assert_parses("100ns", Duration::from_nanos(100));
        assert_parses("100us", Duration::from_micros(100));
        assert_parses("100ms", Duration::from_millis(100));
        assert_parses("1s", Duration::from_secs(1));
        assert_parses("1m", Duration::from_secs(60));
        assert_parses("1h", Duration::from_secs(3_600));
        assert_parses("1d", Duration::from_secs(86_400));
        assert_parses("1w", Duration::from_secs(604_800));
        assert_parses("1y", Duration::from_secs(31_556_926));
    }

    #[test]
    fn multiple_groups_accumulate() {
        assert_parses("1ms100us", Duration::from_micros(1_100));
        assert_parses("1h30m", Duration::from_secs(5_400));
        // a group may exceed the natural range of the next-larger unit
        assert_parses("1h128m", Duration::from_secs(11_280));
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_parses("1m 1s", Duration::from_secs(61));
        assert_parses("1w 1s", Duration::from_secs(604_801));
        assert_parses(" 2s ", Duration::from_secs(2));
    }

    #[test]
    fn bare_suffix_is_rejected() {
        assert_eq!(parse("ms"), Err(Error::Format));
    }

    #[test]
    fn bare_number_is_rejected() {
        assert_eq!(parse("1234"), Err(Error::Format));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse(""), Err(Error::Format));
        assert_eq!(parse("   "), Err(Error::Format));
    }

    #[test]
    fn unknown_suffix_is_rejected() {
        assert_eq!(parse("1000x"), Err(Error::Format));
    }

    #[test]
    fn trailing_number_is_rejected() {
        assert_eq!(parse("1s100"), Err(Error::Format));
    }

    #[test]
    fn count_too_large_for_u64() {
        let input = "99999999999999999999999999s";
        assert!(matches!(parse(input), Err(Error::ParseInt(_))));
    }

    #[test]
    fn overflow_in_one_group() {
        assert_eq!(parse("584554530873y"), Err(Error::Overflow));
    }

    #[test]
    fn overflow_across_groups() {
        assert_eq!(parse("584554530872y 29w"), Err(Error::Overflow));
    }
}
