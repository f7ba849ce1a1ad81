#![cfg(feature = "std")]

//! Plain-text board renderer.

use std::io::{self, Write};

use crate::{
    board::{Board, Boards, Cell, Reveal},
    common::{Coord, HitResult, Side},
    config::BOARD_SIZE,
    renderer::{BoardEvent, BoardRenderer},
    targeting::Selection,
};

/// Character drawn for a cell.
///
/// `.` water, `S` ship (only when `show_ships`), `X` hit, `o` miss and `+`
/// for the highlighted selection, which takes precedence.
pub fn cell_symbol(cell: &Cell, show_ships: bool, highlighted: bool) -> char {
    if highlighted {
        return '+';
    }
    match cell.revealed {
        Reveal::Hit => 'X',
        Reveal::Miss => 'o',
        Reveal::Unknown if show_ships && cell.occupied => 'S',
        Reveal::Unknown => '.',
    }
}

/// Writes boards to `out` as text grids with column letters and row numbers.
pub struct TextRenderer<W> {
    out: W,
    reveal_opponent: bool,
    highlight: Option<Selection>,
}

impl<W: Write> TextRenderer<W> {
    /// The player's ships are always drawn; the opponent's only when
    /// `reveal_opponent` is set.
    pub fn new(out: W, reveal_opponent: bool) -> Self {
        Self {
            out,
            reveal_opponent,
            highlight: None,
        }
    }

    /// The highlighted cell, if any.
    pub fn highlight(&self) -> Option<Selection> {
        self.highlight
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn shows_ships(&self, side: Side) -> bool {
        side == Side::Player || self.reveal_opponent
    }

    fn highlighted(&self, side: Side, coord: Coord) -> bool {
        self.highlight
            .is_some_and(|sel| sel.side == side && sel.coord == coord)
    }

    fn draw_board(&mut self, side: Side, board: &Board) -> io::Result<()> {
        let title = match side {
            Side::Player => "Your board",
            Side::Opponent => "Opponent board",
        };
        writeln!(self.out, "{}:", title)?;
        write!(self.out, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(self.out, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(self.out)?;
        let show_ships = self.shows_ships(side);
        for cell in board.cells() {
            if cell.coord.col() == 0 {
                write!(self.out, "{:2} ", cell.coord.row() + 1)?;
            }
            let ch = cell_symbol(&cell, show_ships, self.highlighted(side, cell.coord));
            write!(self.out, " {}", ch)?;
            if cell.coord.col() + 1 == BOARD_SIZE {
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn draw_event(&mut self, event: &BoardEvent, boards: &Boards) -> io::Result<()> {
        match *event {
            BoardEvent::Rerolled { side } => {
                writeln!(self.out, "\nShips placed on the {} board.", side)?;
                self.draw_board(side, boards.get(side))?;
            }
            BoardEvent::Selected { current, .. } => {
                // Replacing the highlight drops the previous one.
                self.highlight = Some(current);
                writeln!(self.out, "\nTarget selected: {}", current.coord)?;
                self.draw_board(current.side, boards.get(current.side))?;
            }
            BoardEvent::Fired { selection, result } => {
                if self.highlight == Some(selection) {
                    self.highlight = None;
                }
                let verdict = match result {
                    HitResult::Hit => "hit!",
                    HitResult::Miss => "miss.",
                };
                writeln!(self.out, "\nFired at {}: {}", selection.coord, verdict)?;
                self.draw_board(selection.side, boards.get(selection.side))?;
            }
            BoardEvent::Redraw => {
                for side in Side::BOTH {
                    writeln!(self.out)?;
                    self.draw_board(side, boards.get(side))?;
                }
            }
        }
        self.out.flush()
    }
}

impl<W: Write> BoardRenderer for TextRenderer<W> {
    fn render(&mut self, event: &BoardEvent, boards: &Boards) {
        if let Err(e) = self.draw_event(event, boards) {
            log::warn!("failed to draw board: {}", e);
        }
    }
}
