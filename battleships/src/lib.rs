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

//! Resolves a single round of Battleship.
//!
//! A round is described entirely by text: a list of ship descriptors such as `"3:2,3:5"`
//! (anchor coordinate, then end coordinate, each written `row:col`) and a list of guesses
//! such as `"3:3"`. [`play`] places the fleet, fires every guess in order and returns the
//! number of ships that were sunk.
//!
//! ```
//! let sunk = battleships::play(&["3:2,3:5"], &["7:0", "3:2", "3:3", "3:4", "3:5"])?;
//! assert_eq!(sunk, 1);
//! # Ok::<(), battleships::PlayError>(())
//! ```
//!
//! [`Resolver`] exposes the same computation with custom [`Rules`] and an [`Observer`]
//! that is told about every placement, hit, miss and sinking.

pub use self::{
    board::{Board, Coordinate, ShipId, ShipRef, ShotOutcome},
    errors::{ErrorKind, ParseError, ParseErrorKind, PlayError},
    game::{play, Resolver, Tally},
    observer::{Event, LogObserver, Observer},
    rules::{OverlapCheck, Rules},
    ships::{Orientation, Placement, ShipDescriptor},
};

pub mod board;
mod errors;
pub mod game;
pub mod observer;
#[cfg(feature = "rng_gen")]
pub mod random;
mod rules;
pub mod ships;
