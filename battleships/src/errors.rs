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
//! Errors raised while resolving a round.

use thiserror::Error;

use crate::{board::Coordinate, ships::ShipDescriptor};

/// Reason why a piece of input text could not be parsed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// A ship descriptor did not contain the `,` between its two coordinates.
    #[error("expected two coordinates separated by ','")]
    MissingComma,
    /// A coordinate did not contain the `:` between its row and column.
    #[error("expected a coordinate written as 'row:col'")]
    MissingColon,
    /// More separators than the format allows.
    #[error("too many separators")]
    TooManyParts,
    /// An axis was not a non-negative decimal integer.
    #[error("axis is not a non-negative decimal integer")]
    InvalidNumber,
}

/// Error returned when a coordinate or ship descriptor is not well formed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not parse {input:?}: {kind}")]
pub struct ParseError {
    #[source]
    kind: ParseErrorKind,
    input: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }

    /// Get the reason parsing failed.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Category of a [`PlayError`], for callers that only care which rule was broken.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    Malformed,
    DuplicatePlacement,
    InvalidShape,
    InvalidRangeOrder,
    InvalidSize,
    OutOfBounds,
}

/// Error returned when a round cannot be resolved. Every variant describes bad input
/// from the caller; the first one encountered aborts the round.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PlayError {
    /// A ship descriptor or guess was not well formed.
    #[error(transparent)]
    Malformed(#[from] ParseError),

    /// The ship covers a cell already occupied by a previously placed ship.
    #[error("ship {descriptor} intersects another ship at {coord}")]
    DuplicatePlacement {
        descriptor: ShipDescriptor,
        coord: Coordinate,
    },

    /// The two coordinates share neither a row nor a column.
    #[error("ship {descriptor} is neither horizontal nor vertical")]
    InvalidShape { descriptor: ShipDescriptor },

    /// The end coordinate comes before the anchor.
    #[error("ship {descriptor} must list its lowest coordinate first")]
    InvalidRangeOrder { descriptor: ShipDescriptor },

    /// The ship is too short or too long.
    #[error("ship {descriptor} has length {len}, must be between {min} and {max}")]
    InvalidSize {
        descriptor: ShipDescriptor,
        len: usize,
        min: usize,
        max: usize,
    },

    /// Part of the ship lies outside a bounded board.
    #[error("ship {descriptor} leaves the board at {coord}")]
    OutOfBounds {
        descriptor: ShipDescriptor,
        coord: Coordinate,
    },
}

impl PlayError {
    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayError::Malformed(_) => ErrorKind::Malformed,
            PlayError::DuplicatePlacement { .. } => ErrorKind::DuplicatePlacement,
            PlayError::InvalidShape { .. } => ErrorKind::InvalidShape,
            PlayError::InvalidRangeOrder { .. } => ErrorKind::InvalidRangeOrder,
            PlayError::InvalidSize { .. } => ErrorKind::InvalidSize,
            PlayError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }

    /// The ship descriptor that was rejected, if the error came from placement.
    pub fn descriptor(&self) -> Option<&ShipDescriptor> {
        match self {
            PlayError::Malformed(_) => None,
            PlayError::DuplicatePlacement { descriptor, .. }
            | PlayError::InvalidShape { descriptor }
            | PlayError::InvalidRangeOrder { descriptor }
            | PlayError::InvalidSize { descriptor, .. }
            | PlayError::OutOfBounds { descriptor, .. } => Some(descriptor),
        }
    }
}
