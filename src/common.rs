//! Common types: coordinates, board sides, shot results and board errors.

use core::fmt;

use crate::config::BOARD_SIZE;

/// Which of the two boards an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    pub fn name(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cell position known to lie on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Checked constructor; fails with `OutOfBounds` outside `[0, BOARD_SIZE)`.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Coord { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major cell index.
    pub(crate) fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < BOARD_SIZE * BOARD_SIZE);
        Coord {
            row: idx / BOARD_SIZE,
            col: idx % BOARD_SIZE,
        }
    }

    /// Every cell of the grid, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Coord::from_index)
    }

    /// The cell `steps` away along a row (`horizontal`) or a column.
    pub fn offset(&self, steps: usize, horizontal: bool) -> Result<Self, BoardError> {
        if horizontal {
            Coord::new(self.row, self.col + steps)
        } else {
            Coord::new(self.row + steps, self.col)
        }
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = BoardError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

/// Chess-style label, column letter then 1-based row (`B7`).
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum HitResult {
    Hit,
    Miss,
}

/// Errors returned by board, placement and targeting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would extend past the edge of the board.
    ShipOutOfBounds,
    /// Placement gave up under the configured limits.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell out of bounds: row={}, col={}", row, col)
            }
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
