//! Board state: ship occupancy plus the shot history of one side.

use core::fmt;

use crate::common::{BoardError, Coord, HitResult, Side};
use crate::mask::BoardMask;
use crate::ship::Placement;

/// Shot status of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Reveal {
    #[default]
    Unknown,
    Hit,
    Miss,
}

/// Read-only view of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub coord: Coord,
    pub occupied: bool,
    pub revealed: Reveal,
}

/// A 10×10 grid. Occupancy is set by ship placement, reveal state by firing.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    ships: BoardMask,
    hits: BoardMask,
    misses: BoardMask,
}

impl Board {
    /// An empty board: nothing placed, nothing revealed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every cell to unoccupied and unknown.
    pub fn clear(&mut self) {
        self.ships.reset();
        self.hits.reset();
        self.misses.reset();
    }

    /// True iff `(row, col)` is on the grid and no ship covers it.
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        Coord::new(row, col).is_ok_and(|c| !self.ships.contains(c))
    }

    /// Mark a single cell as occupied.
    pub fn place(&mut self, coord: Coord) -> Result<(), BoardError> {
        if !self.ships.insert(coord) {
            return Err(BoardError::ShipOverlaps);
        }
        Ok(())
    }

    /// Mark every cell of `placement` as occupied. Nothing is written unless
    /// all of them are free.
    pub fn place_ship(&mut self, placement: &Placement) -> Result<(), BoardError> {
        let mask = placement.mask();
        if !self.ships.is_disjoint(&mask) {
            return Err(BoardError::ShipOverlaps);
        }
        self.ships = self.ships | mask;
        Ok(())
    }

    /// Resolve a shot. Repeat shots return the recorded result and change
    /// nothing.
    pub fn fire(&mut self, coord: Coord) -> HitResult {
        match self.revealed(coord) {
            Reveal::Hit => {
                log::debug!("repeat shot at {} (already hit)", coord);
                HitResult::Hit
            }
            Reveal::Miss => {
                log::debug!("repeat shot at {} (already missed)", coord);
                HitResult::Miss
            }
            Reveal::Unknown if self.ships.contains(coord) => {
                self.hits.insert(coord);
                HitResult::Hit
            }
            Reveal::Unknown => {
                self.misses.insert(coord);
                HitResult::Miss
            }
        }
    }

    pub fn revealed(&self, coord: Coord) -> Reveal {
        if self.hits.contains(coord) {
            Reveal::Hit
        } else if self.misses.contains(coord) {
            Reveal::Miss
        } else {
            Reveal::Unknown
        }
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        Cell {
            coord,
            occupied: self.ships.contains(coord),
            revealed: self.revealed(coord),
        }
    }

    /// All 100 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Coord::all().map(move |c| self.cell(c))
    }

    pub fn occupied_count(&self) -> usize {
        self.ships.len()
    }

    /// Occupancy mask of all ships.
    pub fn occupancy(&self) -> BoardMask {
        self.ships
    }

    pub fn hits(&self) -> BoardMask {
        self.hits
    }

    pub fn misses(&self) -> BoardMask {
        self.misses
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.ships, self.hits, self.misses
        )
    }
}

/// The two boards of a game, one per side. Neither is shared with the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boards {
    player: Board,
    opponent: Board,
}

impl Boards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }
}
