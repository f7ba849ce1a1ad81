//! Ship definitions and straight-line placements.

use core::fmt;

use crate::common::{BoardError, Coord};
use crate::config::BOARD_SIZE;
use crate::mask::BoardMask;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship laid out from `origin` towards increasing column (horizontal) or
/// increasing row (vertical).
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Placement {
    ship: ShipDef,
    origin: Coord,
    orientation: Orientation,
}

impl Placement {
    /// Fails with `ShipOutOfBounds` if the ship would run off the grid.
    pub fn new(ship: ShipDef, origin: Coord, orientation: Orientation) -> Result<Self, BoardError> {
        let start = if orientation.is_horizontal() {
            origin.col()
        } else {
            origin.row()
        };
        if ship.length() == 0 || start + ship.length() > BOARD_SIZE {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Placement {
            ship,
            origin,
            orientation,
        })
    }

    pub fn ship(&self) -> ShipDef {
        self.ship
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let horizontal = self.orientation.is_horizontal();
        // In bounds by construction.
        (0..self.ship.length()).filter_map(move |i| self.origin.offset(i, horizontal).ok())
    }

    pub fn mask(&self) -> BoardMask {
        self.cells().collect()
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placement {{ ship: \"{}\", length: {}, origin: {}, orientation: {:?} }}",
            self.ship.name(),
            self.ship.length(),
            self.origin,
            self.orientation,
        )
    }
}
