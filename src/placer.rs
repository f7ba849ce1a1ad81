//! Random fleet placement by rejection sampling.
//!
//! Each ship draws a row, a column and an orientation uniformly until the
//! resulting run of cells fits on the board without overlapping an earlier
//! ship. There is no backtracking between ships. Without limits the loop is
//! unbounded; for the standard fleet on a 10×10 board it settles after a few
//! dozen draws.

use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::config::{BOARD_SIZE, FLEET};
use crate::ship::{Orientation, Placement, ShipDef};

/// Optional caps on the rejection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementLimits {
    /// Clear the board and start the fleet over after this many consecutive
    /// rejected draws for one ship.
    pub restart_after: Option<u32>,
    /// Give up with `UnableToPlaceShip` after this many fleet restarts.
    pub max_restarts: Option<u32>,
}

impl PlacementLimits {
    /// No caps at all.
    pub const UNBOUNDED: PlacementLimits = PlacementLimits {
        restart_after: None,
        max_restarts: None,
    };

    pub fn restart_after(draws: u32) -> Self {
        PlacementLimits {
            restart_after: Some(draws),
            max_restarts: None,
        }
    }

    pub fn with_max_restarts(mut self, restarts: u32) -> Self {
        self.max_restarts = Some(restarts);
        self
    }
}

/// Summary of one successful placement run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlacementReport {
    /// One entry per fleet ship, in fleet order.
    pub ships: Vec<Placement>,
    /// Random draws taken, restarts included.
    pub draws: u32,
    pub restarts: u32,
}

/// Places a fleet of ships onto a board.
#[derive(Debug, Clone, Copy)]
pub struct ShipPlacer {
    fleet: &'static [ShipDef],
    limits: PlacementLimits,
}

impl Default for ShipPlacer {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipPlacer {
    /// Placer for the standard [`FLEET`] with no limits.
    pub fn new() -> Self {
        Self::with_fleet(&FLEET)
    }

    pub fn with_fleet(fleet: &'static [ShipDef]) -> Self {
        ShipPlacer {
            fleet,
            limits: PlacementLimits::UNBOUNDED,
        }
    }

    pub fn limits(mut self, limits: PlacementLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn fleet(&self) -> &'static [ShipDef] {
        self.fleet
    }

    /// Clear `board` and place every ship of the fleet on it.
    ///
    /// A fleet with a ship that can never fit is rejected up front with
    /// `ShipOutOfBounds`. On `UnableToPlaceShip` the board is left cleared.
    pub fn place_fleet<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<PlacementReport, BoardError> {
        if self
            .fleet
            .iter()
            .any(|def| def.length() == 0 || def.length() > BOARD_SIZE)
        {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut draws = 0u32;
        let mut restarts = 0u32;
        'fleet: loop {
            board.clear();
            let mut ships = Vec::with_capacity(self.fleet.len());
            for &def in self.fleet {
                match self.place_ship(board, def, rng, &mut draws)? {
                    Some(placement) => ships.push(placement),
                    None => {
                        if self.limits.max_restarts.is_some_and(|max| restarts >= max) {
                            log::warn!(
                                "giving up placement after {} restarts ({} draws)",
                                restarts,
                                draws
                            );
                            board.clear();
                            return Err(BoardError::UnableToPlaceShip);
                        }
                        restarts += 1;
                        log::debug!("{} did not fit, restarting fleet", def.name());
                        continue 'fleet;
                    }
                }
            }
            log::debug!(
                "placed {} ships ({} cells) in {} draws, {} restarts",
                ships.len(),
                board.occupied_count(),
                draws,
                restarts
            );
            return Ok(PlacementReport {
                ships,
                draws,
                restarts,
            });
        }
    }

    /// Draw until `def` fits. `None` means the restart limit was hit.
    fn place_ship<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        def: ShipDef,
        rng: &mut R,
        draws: &mut u32,
    ) -> Result<Option<Placement>, BoardError> {
        let mut rejected = 0u32;
        loop {
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            let orientation = if rng.random::<bool>() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            *draws = draws.saturating_add(1);

            if let Some(placement) = fitting_placement(board, def, row, col, orientation) {
                board.place_ship(&placement)?;
                return Ok(Some(placement));
            }
            log::trace!(
                "rejected {} at ({}, {}) {:?}",
                def.name(),
                row,
                col,
                orientation
            );
            rejected += 1;
            if self.limits.restart_after.is_some_and(|limit| rejected >= limit) {
                return Ok(None);
            }
        }
    }
}

/// The placement of `def` at `(row, col)` if it stays on the grid and every
/// cell is free.
pub fn fitting_placement(
    board: &Board,
    def: ShipDef,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> Option<Placement> {
    let origin = Coord::new(row, col).ok()?;
    let placement = Placement::new(def, origin, orientation).ok()?;
    let fits = placement.cells().all(|c| board.is_free(c.row(), c.col()));
    fits.then_some(placement)
}
