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
//! Hooks for watching a round being resolved.
use enumflags2::BitFlags;
use log::{debug, info};

use crate::{
    board::{Coordinate, ShipId},
    ships::Placement,
};

/// Receives events while a round is resolved. Every method defaults to doing nothing, so
/// implementors only override what they care about. `()` is the observer that ignores
/// everything.
pub trait Observer {
    /// A ship was placed on the board.
    fn placed(&mut self, ship: ShipId, placement: &Placement) {
        let _ = (ship, placement);
    }

    /// A guess hit a ship without sinking it.
    fn hit(&mut self, ship: ShipId, coord: Coordinate) {
        let _ = (ship, coord);
    }

    /// A guess did not hit anything.
    fn miss(&mut self, coord: Coordinate) {
        let _ = coord;
    }

    /// A guess hit the last remaining cell of a ship.
    fn sunk(&mut self, ship: ShipId, coord: Coordinate) {
        let _ = (ship, coord);
    }
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn placed(&mut self, ship: ShipId, placement: &Placement) {
        (**self).placed(ship, placement)
    }

    fn hit(&mut self, ship: ShipId, coord: Coordinate) {
        (**self).hit(ship, coord)
    }

    fn miss(&mut self, coord: Coordinate) {
        (**self).miss(coord)
    }

    fn sunk(&mut self, ship: ShipId, coord: Coordinate) {
        (**self).sunk(ship, coord)
    }
}

/// Kinds of event an [`Observer`] is told about.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Event {
    Placed = 0b0001,
    Hit = 0b0010,
    Miss = 0b0100,
    Sunk = 0b1000,
}

/// Observer that writes events to the [`log`] facade. Hits and sinkings are logged at
/// `info`, placements and misses at `debug`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LogObserver {
    events: BitFlags<Event>,
}

impl LogObserver {
    /// Log only the given kinds of event.
    pub fn new<B: Into<BitFlags<Event>>>(events: B) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// Log every event.
    pub fn all() -> Self {
        Self::new(BitFlags::all())
    }

    /// The kinds of event being logged.
    pub fn events(&self) -> BitFlags<Event> {
        self.events
    }
}

impl Default for LogObserver {
    /// Log hits and sinkings.
    fn default() -> Self {
        Self::new(Event::Hit | Event::Sunk)
    }
}

impl Observer for LogObserver {
    fn placed(&mut self, ship: ShipId, placement: &Placement) {
        if self.events.contains(Event::Placed) {
            debug!(
                "placed ship {} at {}..={} ({:?}, length {})",
                ship.index(),
                placement.anchor(),
                placement.end(),
                placement.orientation(),
                placement.len()
            );
        }
    }

    fn hit(&mut self, ship: ShipId, coord: Coordinate) {
        if self.events.contains(Event::Hit) {
            info!("hit: {} (ship {})", coord, ship.index());
        }
    }

    fn miss(&mut self, coord: Coordinate) {
        if self.events.contains(Event::Miss) {
            debug!("miss: {}", coord);
        }
    }

    fn sunk(&mut self, ship: ShipId, coord: Coordinate) {
        if self.events.contains(Event::Hit) {
            info!("hit: {} (ship {})", coord, ship.index());
        }
        if self.events.contains(Event::Sunk) {
            info!("sunk ship {}", ship.index());
        }
    }
}
