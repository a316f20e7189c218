// SPDX-FileCopyrightText: 2026 duration-string contributors
//
// SPDX-License-Identifier: MIT

use std::time::Duration;

use crate::unit::Unit;

/// Renders a `Duration` using the largest unit that divides its nanosecond
/// count exactly, so `Duration::from_millis(1000)` renders as `1s` but 61
/// seconds stays `61s` rather than `1m1s`.
pub(crate) fn format(duration: Duration) -> String {
    let total = duration.as_nanos();
    for unit in Unit::DESCENDING {
        if total % unit.nanos() == 0 {
            let scaled = total / unit.nanos();
            return format!("{scaled}{}", unit.suffix());
        }
    }
    unreachable!("every duration is a whole number of nanoseconds")
}
