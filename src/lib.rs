#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod mask;
mod placer;
pub mod prelude;
mod renderer;
mod ship;
mod targeting;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use mask::{BoardMask, CellMask, Cells};
pub use placer::*;
pub use renderer::*;
pub use ship::*;
pub use targeting::*;
#[cfg(feature = "std")]
pub use ui::*;
