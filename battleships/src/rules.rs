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
//! Placement rules for a round.

/// Which cells of a new ship are checked against ships that were already placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OverlapCheck {
    /// Every cell of the new ship must be free.
    EveryCell,
    /// Only the anchor must be free. A contested cell further along the new ship stays
    /// with the ship that claimed it first, so the new ship can never be sunk.
    AnchorOnly,
}

/// Rules that ship placements are validated against.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rules {
    /// Shortest allowed ship.
    min_len: usize,
    /// Longest allowed ship.
    max_len: usize,
    /// How overlapping ships are detected.
    overlap: OverlapCheck,
    /// `(rows, cols)` of the board, if ships must stay on it.
    bounds: Option<(usize, usize)>,
}

impl Rules {
    /// Number of rows and columns on the standard board.
    pub const STANDARD_SIZE: usize = 10;

    /// The standard rules: ships of length 2 to 4, no overlapping cells, and an
    /// unbounded board.
    pub fn standard() -> Self {
        Self {
            min_len: 2,
            max_len: 4,
            overlap: OverlapCheck::EveryCell,
            bounds: None,
        }
    }

    /// Set the allowed range of ship lengths.
    /// Panics if `min_len` is 0 or greater than `max_len`.
    pub fn with_lengths(self, min_len: usize, max_len: usize) -> Self {
        assert!(
            min_len > 0 && min_len <= max_len,
            "invalid ship length range {}..={}",
            min_len,
            max_len
        );
        Self {
            min_len,
            max_len,
            ..self
        }
    }

    /// Set how overlapping ships are detected.
    pub fn with_overlap(self, overlap: OverlapCheck) -> Self {
        Self { overlap, ..self }
    }

    /// Require every ship cell to lie on a board of `rows` by `cols`.
    /// Panics if either dimension is 0.
    pub fn bounded(self, rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "board must be nonzero, got {}x{}",
            rows,
            cols
        );
        Self {
            bounds: Some((rows, cols)),
            ..self
        }
    }

    /// Lift any board bounds.
    pub fn unbounded(self) -> Self {
        Self {
            bounds: None,
            ..self
        }
    }

    /// Shortest allowed ship.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Longest allowed ship.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// How overlapping ships are detected.
    pub fn overlap(&self) -> OverlapCheck {
        self.overlap
    }

    /// The `(rows, cols)` ships must stay within, if any.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        self.bounds
    }
}

impl Default for Rules {
    /// Same as [`Rules::standard`].
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules() {
        let rules = Rules::default();
        assert_eq!(rules, Rules::standard());
        assert_eq!((rules.min_len(), rules.max_len()), (2, 4));
        assert_eq!(rules.overlap(), OverlapCheck::EveryCell);
        assert_eq!(rules.bounds(), None);
    }

    #[test]
    fn builders_replace_single_fields() {
        let rules = Rules::standard()
            .bounded(Rules::STANDARD_SIZE, Rules::STANDARD_SIZE)
            .with_overlap(OverlapCheck::AnchorOnly)
            .with_lengths(1, 5);
        assert_eq!(rules.bounds(), Some((10, 10)));
        assert_eq!(rules.overlap(), OverlapCheck::AnchorOnly);
        assert_eq!((rules.min_len(), rules.max_len()), (1, 5));
        assert_eq!(rules.unbounded().bounds(), None);
    }

    #[test]
    #[should_panic]
    fn zero_length_ships_are_rejected() {
        Rules::standard().with_lengths(0, 4);
    }

    #[test]
    #[should_panic]
    fn inverted_length_range_is_rejected() {
        Rules::standard().with_lengths(4, 2);
    }
}
