// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{fmt, str::FromStr};

use crate::errors::{ParseError, ParseErrorKind};

/// The coordinates of a cell on the board, written `row:col`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    /// Parse a coordinate written as `row:col`. Both axes must be plain decimal digits;
    /// signs and whitespace are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(':')
            .ok_or_else(|| ParseError::new(ParseErrorKind::MissingColon, s))?;
        if col.contains(':') {
            return Err(ParseError::new(ParseErrorKind::TooManyParts, s));
        }
        match (parse_axis(row), parse_axis(col)) {
            (Some(row), Some(col)) => Ok(Self::new(row, col)),
            _ => Err(ParseError::new(ParseErrorKind::InvalidNumber, s)),
        }
    }
}

/// Parse a single axis. `usize::from_str` accepts a leading `+`, so digits are checked
/// first.
fn parse_axis(axis: &str) -> Option<usize> {
    if axis.is_empty() || !axis.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        axis.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_then_column() {
        assert_eq!("3:5".parse(), Ok(Coordinate::new(3, 5)));
        assert_eq!("0:0".parse(), Ok(Coordinate::new(0, 0)));
        assert_eq!("12:07".parse(), Ok(Coordinate::new(12, 7)));
    }

    #[test]
    fn display_matches_input_format() {
        assert_eq!(Coordinate::new(7, 0).to_string(), "7:0");
    }

    #[test]
    fn rejects_malformed_text() {
        let kind = |s: &str| s.parse::<Coordinate>().unwrap_err().kind();
        assert_eq!(kind("35"), ParseErrorKind::MissingColon);
        assert_eq!(kind(""), ParseErrorKind::MissingColon);
        assert_eq!(kind("3:5:1"), ParseErrorKind::TooManyParts);
        assert_eq!(kind("3:"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind(":5"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("-3:5"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("+3:5"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind(" 3:5"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("a:b"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("99999999999999999999999:1"), ParseErrorKind::InvalidNumber);
    }

    #[test]
    fn parse_error_keeps_input() {
        let err = "x:1".parse::<Coordinate>().unwrap_err();
        assert_eq!(err.input(), "x:1");
    }
}
