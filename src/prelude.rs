//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardError, BoardEvent, BoardRenderer, Coord, FireOutcome, GameSession, HitResult,
    NullRenderer, ShipPlacer, Side,
};

#[cfg(feature = "std")]
pub use crate::{cli, init_logging, TextRenderer};
