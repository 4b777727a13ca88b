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
//! Ship descriptors and the placements they resolve to.
use std::{fmt, str::FromStr};

use crate::{
    board::Coordinate,
    errors::{ParseError, ParseErrorKind, PlayError},
    rules::Rules,
};

/// Direction a ship runs in from its anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship stays in one row and spans columns.
    Horizontal,
    /// The ship stays in one column and spans rows.
    Vertical,
}

/// A ship as written in the input: an anchor coordinate and an end coordinate, e.g.
/// `3:2,3:5`. No rules have been checked yet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipDescriptor {
    /// First coordinate listed.
    pub anchor: Coordinate,
    /// Second coordinate listed.
    pub end: Coordinate,
}

impl ShipDescriptor {
    /// Construct a descriptor from its two endpoints.
    pub fn new(anchor: Coordinate, end: Coordinate) -> Self {
        Self { anchor, end }
    }

    /// Validate this descriptor's shape against `rules`, producing the placement it
    /// describes. Does not account for other ships.
    pub fn placement(&self, rules: &Rules) -> Result<Placement, PlayError> {
        let (anchor, end) = (self.anchor, self.end);
        // A single-cell descriptor counts as horizontal and is then rejected for its size.
        let (orientation, from, to) = if anchor.row == end.row {
            (Orientation::Horizontal, anchor.col, end.col)
        } else if anchor.col == end.col {
            (Orientation::Vertical, anchor.row, end.row)
        } else {
            return Err(PlayError::InvalidShape { descriptor: *self });
        };
        // An end one cell before the anchor spans zero cells, which is a size error.
        if to.saturating_add(1) < from {
            return Err(PlayError::InvalidRangeOrder { descriptor: *self });
        }
        // Saturates so a span across the whole axis still reads as too long.
        let len = if to < from {
            0
        } else {
            (to - from).saturating_add(1)
        };
        if len < rules.min_len() || len > rules.max_len() {
            return Err(PlayError::InvalidSize {
                descriptor: *self,
                len,
                min: rules.min_len(),
                max: rules.max_len(),
            });
        }
        let placement = Placement {
            anchor,
            orientation,
            len,
        };
        if let Some((rows, cols)) = rules.bounds() {
            if let Some(coord) = placement
                .cells()
                .find(|coord| coord.row >= rows || coord.col >= cols)
            {
                return Err(PlayError::OutOfBounds {
                    descriptor: *self,
                    coord,
                });
            }
        }
        Ok(placement)
    }
}

impl fmt::Display for ShipDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.anchor, self.end)
    }
}

impl FromStr for ShipDescriptor {
    type Err = ParseError;

    /// Parse a descriptor written as `row:col,row:col`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (anchor, end) = s
            .split_once(',')
            .ok_or_else(|| ParseError::new(ParseErrorKind::MissingComma, s))?;
        if end.contains(',') {
            return Err(ParseError::new(ParseErrorKind::TooManyParts, s));
        }
        // Report the whole descriptor rather than just the failing half.
        let coord = |text: &str| {
            text.parse::<Coordinate>()
                .map_err(|err| ParseError::new(err.kind(), s))
        };
        Ok(Self::new(coord(anchor)?, coord(end)?))
    }
}

/// A validated straight-line ship: where it starts, which way it runs, and how long it is.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    anchor: Coordinate,
    orientation: Orientation,
    len: usize,
}

impl Placement {
    /// The cell the ship starts from.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// The last cell of the ship.
    pub fn end(&self) -> Coordinate {
        self.cell(self.len - 1)
    }

    /// Which way the ship runs.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells the ship covers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterate the cells of the ship from anchor to end, inclusive.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let placement = *self;
        (0..self.len).map(move |offset| placement.cell(offset))
    }

    /// Returns true if the ship covers `coord`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        let (fixed, along, start) = match self.orientation {
            Orientation::Horizontal => (coord.row == self.anchor.row, coord.col, self.anchor.col),
            Orientation::Vertical => (coord.col == self.anchor.col, coord.row, self.anchor.row),
        };
        fixed && along >= start && along - start < self.len
    }

    fn cell(&self, offset: usize) -> Coordinate {
        match self.orientation {
            Orientation::Horizontal => Coordinate::new(self.anchor.row, self.anchor.col + offset),
            Orientation::Vertical => Coordinate::new(self.anchor.row + offset, self.anchor.col),
        }
    }
}
