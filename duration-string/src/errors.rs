// SPDX-FileCopyrightText: 2026 duration-string contributors
//
// SPDX-License-Identifier: MIT

use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("expected one or more groups of `[0-9]+(ns|us|ms|[smhdwy])`")]
    Format,

    #[error("duration is too large to fit in the target type")]
    Overflow,

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),
}
