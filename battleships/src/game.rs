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
//! Resolution of a whole round: place the fleet, fire every guess, count what sank.
use crate::{
    board::{Board, Coordinate, ShotOutcome},
    errors::PlayError,
    observer::Observer,
    rules::Rules,
    ships::ShipDescriptor,
};

/// Counts from resolving one round.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Tally {
    /// Guesses that hit a ship, including the ones that sank it.
    pub hits: usize,
    /// Guesses that hit nothing.
    pub misses: usize,
    /// Ships sunk.
    pub sunk: usize,
}

/// Resolves rounds under a set of [`Rules`], reporting events to an [`Observer`].
///
/// Each call builds its own [`Board`], so a resolver carries no state between rounds
/// apart from whatever the observer records.
#[derive(Debug)]
pub struct Resolver<O = ()> {
    rules: Rules,
    observer: O,
}

impl Resolver {
    /// Construct a resolver with the given rules and no observer.
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            observer: (),
        }
    }
}

impl Default for Resolver {
    /// A resolver with the standard rules and no observer.
    fn default() -> Self {
        Self::new(Rules::standard())
    }
}

impl<O: Observer> Resolver<O> {
    /// Replace the observer.
    pub fn with_observer<P: Observer>(self, observer: P) -> Resolver<P> {
        Resolver {
            rules: self.rules,
            observer,
        }
    }

    /// The rules ships are placed under.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Get a reference to the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Extract the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Parse and place every ship descriptor, in order. Stops at the first descriptor
    /// that is malformed or breaks a placement rule.
    pub fn setup<I, S>(&mut self, ships: I) -> Result<Board, PlayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut board = Board::new(self.rules);
        for ship in ships {
            let descriptor: ShipDescriptor = ship.as_ref().parse()?;
            let id = board.place(descriptor)?;
            if let Some(ship) = board.get_ship(id) {
                self.observer.placed(id, ship.placement());
            }
        }
        Ok(board)
    }

    /// Fire each guess at `board`, in order, and tally the results. Every guess is parsed
    /// before the first one is fired, so a malformed guess leaves the board untouched.
    pub fn fire<I, G>(&mut self, board: &mut Board, guesses: I) -> Result<Tally, PlayError>
    where
        I: IntoIterator<Item = G>,
        G: AsRef<str>,
    {
        let guesses = guesses
            .into_iter()
            .map(|guess| guess.as_ref().parse::<Coordinate>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut tally = Tally::default();
        for coord in guesses {
            match board.shoot(coord) {
                ShotOutcome::Miss => {
                    tally.misses += 1;
                    self.observer.miss(coord);
                }
                ShotOutcome::Hit(id) => {
                    tally.hits += 1;
                    self.observer.hit(id, coord);
                }
                ShotOutcome::Sunk(id) => {
                    tally.hits += 1;
                    tally.sunk += 1;
                    self.observer.sunk(id, coord);
                }
            }
        }
        Ok(tally)
    }

    /// Place `ships` and fire `guesses`, returning the full [`Tally`].
    pub fn resolve<I, S, J, G>(&mut self, ships: I, guesses: J) -> Result<Tally, PlayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        J: IntoIterator<Item = G>,
        G: AsRef<str>,
    {
        let mut board = self.setup(ships)?;
        self.fire(&mut board, guesses)
    }

    /// Place `ships` and fire `guesses`, returning the number of ships sunk.
    pub fn play<I, S, J, G>(&mut self, ships: I, guesses: J) -> Result<usize, PlayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        J: IntoIterator<Item = G>,
        G: AsRef<str>,
    {
        self.resolve(ships, guesses).map(|tally| tally.sunk)
    }
}

/// Place `ships` under the standard [`Rules`], fire `guesses` in order, and return how
/// many ships were sunk.
///
/// Ships are written `row:col,row:col` (anchor, then end) and guesses `row:col`. Any
/// malformed text or rule violation aborts the round with a [`PlayError`].
pub fn play<I, S, J, G>(ships: I, guesses: J) -> Result<usize, PlayError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    J: IntoIterator<Item = G>,
    G: AsRef<str>,
{
    Resolver::new(Rules::standard()).play(ships, guesses)
}
