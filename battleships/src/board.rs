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
//! The occupancy map that ship placements and guesses are resolved against.

use std::collections::{hash_map::Entry, HashMap};

use crate::{
    errors::PlayError,
    rules::{OverlapCheck, Rules},
    ships::{Placement, ShipDescriptor},
};

pub use self::coordinate::Coordinate;

mod coordinate;

/// Index of a ship on a [`Board`], in the order ships were placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Position of the ship in placement order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A placed ship and its remaining health.
#[derive(Debug)]
struct ShipState {
    placement: Placement,
    /// Cells not yet hit. Zero means sunk.
    health: usize,
}

/// Handle to a ship that allows getting information about its status.
#[derive(Debug, Copy, Clone)]
pub struct ShipRef<'a> {
    id: ShipId,
    state: &'a ShipState,
}

impl<'a> ShipRef<'a> {
    /// Get the ID of the ship.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Where the ship was placed.
    pub fn placement(&self) -> &'a Placement {
        &self.state.placement
    }

    /// Number of cells that have not been hit.
    pub fn health(&self) -> usize {
        self.state.health
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.state.health == 0
    }
}

/// Result of a single guess.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The guess did not hit anything.
    Miss,
    /// The guess hit the ship with the given ID, but did not sink it.
    Hit(ShipId),
    /// The guess hit the last remaining cell of the ship with the given ID.
    Sunk(ShipId),
}

impl ShotOutcome {
    /// Get the id of the ship that was hit.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) | ShotOutcome::Sunk(id) => Some(id),
        }
    }
}

/// Ships placed for one round, and the map from each occupied cell to the ship on it.
///
/// Ships live in an arena indexed by [`ShipId`]; every cell of a ship maps to the same
/// index, so a hit on any cell is visible through all of them.
#[derive(Debug)]
pub struct Board {
    rules: Rules,
    ships: Vec<ShipState>,
    cells: HashMap<Coordinate, ShipId>,
}

impl Board {
    /// Construct an empty board that validates placements against `rules`.
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            ships: Vec::new(),
            cells: HashMap::new(),
        }
    }

    /// The rules placements are checked against.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Place the ship described by `descriptor`, returning its ID.
    ///
    /// The anchor is checked for collisions before the shape, so a descriptor whose anchor
    /// is taken is reported as a duplicate even if its shape is also invalid. Nothing is
    /// registered unless every check passes.
    pub fn place(&mut self, descriptor: ShipDescriptor) -> Result<ShipId, PlayError> {
        if self.cells.contains_key(&descriptor.anchor) {
            return Err(PlayError::DuplicatePlacement {
                descriptor,
                coord: descriptor.anchor,
            });
        }
        let placement = descriptor.placement(&self.rules)?;
        if self.rules.overlap() == OverlapCheck::EveryCell {
            if let Some(coord) = placement.cells().find(|c| self.cells.contains_key(c)) {
                return Err(PlayError::DuplicatePlacement { descriptor, coord });
            }
        }

        let id = ShipId(self.ships.len());
        for coord in placement.cells() {
            // Under AnchorOnly a contested cell keeps its first owner.
            if let Entry::Vacant(entry) = self.cells.entry(coord) {
                entry.insert(id);
            }
        }
        self.ships.push(ShipState {
            placement,
            health: placement.len(),
        });
        Ok(id)
    }

    /// Resolve a guess at `coord`. A hit removes the cell from the map, so guessing the
    /// same cell again is a miss.
    pub fn shoot(&mut self, coord: Coordinate) -> ShotOutcome {
        let id = match self.cells.remove(&coord) {
            None => return ShotOutcome::Miss,
            Some(id) => id,
        };
        let ship = &mut self.ships[id.0];
        ship.health = ship.health.saturating_sub(1);
        if ship.health == 0 {
            ShotOutcome::Sunk(id)
        } else {
            ShotOutcome::Hit(id)
        }
    }

    /// Get the ship with the specified ID if it exists.
    pub fn get_ship(&self, id: ShipId) -> Option<ShipRef> {
        self.ships.get(id.0).map(|state| ShipRef { id, state })
    }

    /// Get the ship occupying `coord`, if that cell has not been hit yet.
    pub fn ship_at(&self, coord: Coordinate) -> Option<ShipRef> {
        self.cells.get(&coord).and_then(|&id| self.get_ship(id))
    }

    /// Get an iterator over all ships on this board, in placement order.
    pub fn iter_ships(&self) -> impl Iterator<Item = ShipRef> {
        self.ships
            .iter()
            .enumerate()
            .map(|(i, state)| ShipRef { id: ShipId(i), state })
    }

    /// Number of ships that have been sunk.
    pub fn sunk(&self) -> usize {
        self.iter_ships().filter(|ship| ship.sunk()).count()
    }

    /// Returns true if ships were placed and all of them are sunk.
    pub fn defeated(&self) -> bool {
        !self.ships.is_empty() && self.iter_ships().all(|ship| ship.sunk())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn board(ships: &[&str]) -> Board {
        let mut board = Board::new(Rules::standard());
        for ship in ships {
            board.place(ship.parse().unwrap()).unwrap();
        }
        board
    }

    fn shoot(board: &mut Board, coord: &str) -> ShotOutcome {
        board.shoot(coord.parse().unwrap())
    }

    #[test]
    fn every_cell_maps_to_the_same_ship() {
        let board = board(&["3:2,3:5", "0:0,1:0"]);
        for col in 2..=5 {
            let ship = board.ship_at(Coordinate::new(3, col)).unwrap();
            assert_eq!(ship.id().index(), 0);
            assert_eq!(ship.health(), 4);
        }
        assert_eq!(board.ship_at(Coordinate::new(1, 0)).unwrap().id().index(), 1);
        assert!(board.ship_at(Coordinate::new(3, 6)).is_none());
    }

    #[test]
    fn hits_are_shared_and_sink_once() {
        let mut board = board(&["2:3,3:3"]);
        let id = board.iter_ships().next().unwrap().id();
        assert_eq!(shoot(&mut board, "2:3"), ShotOutcome::Hit(id));
        assert_eq!(board.get_ship(id).unwrap().health(), 1);
        assert_eq!(shoot(&mut board, "2:3"), ShotOutcome::Miss);
        assert_eq!(shoot(&mut board, "3:3"), ShotOutcome::Sunk(id));
        assert_eq!(shoot(&mut board, "3:3"), ShotOutcome::Miss);
        assert_eq!(board.sunk(), 1);
        assert!(board.defeated());
    }

    #[test]
    fn hit_cells_leave_the_map() {
        let mut board = board(&["3:2,3:4"]);
        shoot(&mut board, "3:3");
        assert!(board.ship_at(Coordinate::new(3, 3)).is_none());
        assert!(board.ship_at(Coordinate::new(3, 2)).is_some());
    }

    #[test]
    fn duplicate_anchor_is_rejected_before_shape() {
        let mut board = board(&["3:2,3:5"]);
        // Diagonal, but the anchor collision is reported first.
        let err = board.place("3:3,5:5".parse().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicatePlacement);
        assert_eq!(board.iter_ships().count(), 1);
    }

    #[test]
    fn overlap_past_the_anchor_is_rejected() {
        let mut board = board(&["3:2,3:5"]);
        match board.place("1:4,4:4".parse().unwrap()) {
            Err(PlayError::DuplicatePlacement { coord, .. }) => {
                assert_eq!(coord, Coordinate::new(3, 4))
            }
            other => panic!("unexpected {:?}", other),
        }
        // Nothing from the rejected ship was registered.
        assert!(board.ship_at(Coordinate::new(1, 4)).is_none());
        assert_eq!(board.ship_at(Coordinate::new(3, 4)).unwrap().id().index(), 0);
    }

    #[test]
    fn anchor_only_keeps_contested_cells_with_first_ship() {
        let mut board = Board::new(Rules::standard().with_overlap(OverlapCheck::AnchorOnly));
        board.place("3:2,3:5".parse().unwrap()).unwrap();
        let second = board.place("1:4,4:4".parse().unwrap()).unwrap();
        assert_eq!(board.ship_at(Coordinate::new(3, 4)).unwrap().id().index(), 0);
        for coord in &["1:4", "2:4", "3:4", "4:4"] {
            shoot(&mut board, coord);
        }
        // The second ship lost a cell to the first and cannot be sunk.
        assert_eq!(board.get_ship(second).unwrap().health(), 1);
        assert_eq!(board.sunk(), 0);
    }

    #[test]
    fn empty_board_is_not_defeated() {
        let mut board = Board::new(Rules::standard());
        assert_eq!(shoot(&mut board, "0:0"), ShotOutcome::Miss);
        assert!(!board.defeated());
        assert_eq!(board.sunk(), 0);
    }
}
