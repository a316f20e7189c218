// SPDX-FileCopyrightText: 2026 duration-string contributors
//
// SPDX-License-Identifier: MIT

//! Convert between human-readable duration strings such as `100ms`, `2s`,
//! `5m 30s` or `1h10m` and [`std::time::Duration`], in both directions.
//!
//! The accepted format is one or more groups of `[0-9]+(ns|us|ms|[smhdwy])`;
//! whitespace is ignored wherever it appears.  Rendering back to a string
//! picks the largest unit that fits the duration exactly.
//!
//! ```rust
//! use std::time::Duration;
//! use duration_string::DurationString;
//!
//! let d: Duration = "1h 30m".parse::<DurationString>().unwrap().into();
//! assert_eq!(d, Duration::from_secs(5400));
//!
//! let s: String = DurationString::from(Duration::from_millis(100)).into();
//! assert_eq!(s, "100ms");
//! ```
//!
//! Serialization to and from the string form is available behind the `serde`
//! feature:
//!
#![cfg_attr(feature = "serde", doc = "```rust")]
#![cfg_attr(not(feature = "serde"), doc = "```ignore")]
//! use duration_string::DurationString;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Timeout {
//!     after: DurationString,
//! }
//!
//! let t: Timeout = serde_json::from_str(r#"{"after":"250ms"}"#).unwrap();
//! assert_eq!(t.after.to_string(), "250ms");
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod errors;
mod format;
mod parse;
#[cfg(feature = "serde")]
mod serde_support;
mod unit;

use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use std::time::Duration;

pub use crate::errors::{Error, Result};

/// A [`Duration`] that converts to and from the string form.
///
/// The wrapper is transparent: it derefs to the inner `Duration`, and
/// `From`/`TryFrom` conversions are provided in both directions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct DurationString(Duration);

impl DurationString {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        DurationString(duration)
    }

    pub fn from_string(duration: String) -> Result<Self> {
        DurationString::try_from(duration)
    }
}

impl fmt::Display for DurationString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format(self.0))
    }
}

impl FromStr for DurationString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse::parse(s).map(DurationString)
    }
}

impl TryFrom<String> for DurationString {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Duration> for DurationString {
    fn from(duration: Duration) -> Self {
        DurationString(duration)
    }
}

impl From<DurationString> for Duration {
    fn from(value: DurationString) -> Self {
        value.0
    }
}

impl From<DurationString> for String {
    fn from(value: DurationString) -> Self {
        format::format(value.0)
    }
}

impl Deref for DurationString {
    type Target = Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DurationString {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Borrow<Duration> for DurationString {
    fn borrow(&self) -> &Duration {
        &self.0
    }
}

impl BorrowMut<Duration> for DurationString {
    fn borrow_mut(&mut self) -> &mut Duration {
        &mut self.0
    }
}
