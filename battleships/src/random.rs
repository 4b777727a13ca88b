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
//! Random fleet generation.
use rand::{distributions::Uniform, Rng};
use thiserror::Error;

use crate::{
    board::{Board, Coordinate},
    rules::{OverlapCheck, Rules},
    ships::ShipDescriptor,
};

/// Number of random anchors tried for each ship before giving up.
const ATTEMPTS_PER_SHIP: usize = 1000;

/// Error returned when a random fleet could not be generated.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// The requested length is not allowed by the rules.
    #[error("ship length {len} is not between {min} and {max}")]
    InvalidLength { len: usize, min: usize, max: usize },
    /// No free position was found for a ship of this length.
    #[error("could not find room for a ship of length {len}")]
    NoRoom { len: usize },
}

/// Generate non-overlapping ships with the given `lengths`, in order.
///
/// Ships are kept on the board described by `rules`, or on the standard 10x10 board if
/// the rules are unbounded. Every descriptor lists its lowest coordinate first, so the
/// result is always accepted by [`Board::place`] under the same rules.
pub fn random_fleet<R: Rng>(
    rng: &mut R,
    rules: &Rules,
    lengths: &[usize],
) -> Result<Vec<ShipDescriptor>, FleetError> {
    let (rows, cols) = rules
        .bounds()
        .unwrap_or((Rules::STANDARD_SIZE, Rules::STANDARD_SIZE));
    let rules = rules
        .bounded(rows, cols)
        .with_overlap(OverlapCheck::EveryCell);
    let row_range = Uniform::new(0, rows);
    let col_range = Uniform::new(0, cols);

    let mut board = Board::new(rules);
    let mut fleet = Vec::with_capacity(lengths.len());
    for &len in lengths {
        if len < rules.min_len() || len > rules.max_len() {
            return Err(FleetError::InvalidLength {
                len,
                min: rules.min_len(),
                max: rules.max_len(),
            });
        }
        let placed = (0..ATTEMPTS_PER_SHIP).find_map(|_| {
            let anchor = Coordinate::new(rng.sample(&row_range), rng.sample(&col_range));
            let end = if rng.gen() {
                Coordinate::new(anchor.row, anchor.col + len - 1)
            } else {
                Coordinate::new(anchor.row + len - 1, anchor.col)
            };
            let descriptor = ShipDescriptor::new(anchor, end);
            board.place(descriptor).ok().map(|_| descriptor)
        });
        match placed {
            Some(descriptor) => fleet.push(descriptor),
            None => return Err(FleetError::NoRoom { len }),
        }
    }
    Ok(fleet)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn fleet_fits_on_the_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let rules = Rules::standard();
        let fleet = random_fleet(&mut rng, &rules, &[2, 3, 3, 4]).unwrap();
        assert_eq!(fleet.len(), 4);

        let mut board = Board::new(rules.bounded(10, 10));
        for (descriptor, &len) in fleet.iter().zip(&[2, 3, 3, 4]) {
            let id = board.place(*descriptor).unwrap();
            assert_eq!(board.get_ship(id).unwrap().placement().len(), len);
        }
    }

    #[test]
    fn rejects_lengths_outside_the_rules() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            random_fleet(&mut rng, &Rules::standard(), &[5]),
            Err(FleetError::InvalidLength {
                len: 5,
                min: 2,
                max: 4
            })
        );
    }

    #[test]
    fn reports_a_full_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let rules = Rules::standard().bounded(2, 2);
        assert_eq!(
            random_fleet(&mut rng, &rules, &[2, 2, 2]),
            Err(FleetError::NoRoom { len: 2 })
        );
    }
}
