use rand::Rng;

use crate::{
    board::{Board, Boards},
    common::{BoardError, Coord, Side},
    placer::{PlacementLimits, PlacementReport, ShipPlacer},
    renderer::{BoardEvent, BoardRenderer},
    targeting::{FireOutcome, Selection, TargetingSession},
};

/// One game: both boards, the pending selection and the renderer that shows
/// them. Every operation runs to completion and notifies the renderer before
/// returning.
pub struct GameSession<R, V> {
    boards: Boards,
    targeting: TargetingSession,
    placer: ShipPlacer,
    rng: R,
    renderer: V,
}

impl<R: Rng, V: BoardRenderer> GameSession<R, V> {
    /// Start a session with both boards freshly placed.
    pub fn new(rng: R, renderer: V) -> Result<Self, BoardError> {
        Self::with_placer(rng, renderer, ShipPlacer::new())
    }

    pub fn with_limits(rng: R, renderer: V, limits: PlacementLimits) -> Result<Self, BoardError> {
        Self::with_placer(rng, renderer, ShipPlacer::new().limits(limits))
    }

    pub fn with_placer(rng: R, renderer: V, placer: ShipPlacer) -> Result<Self, BoardError> {
        let mut session = GameSession {
            boards: Boards::new(),
            targeting: TargetingSession::new(),
            placer,
            rng,
            renderer,
        };
        for side in Side::BOTH {
            session.reroll_board(side)?;
        }
        Ok(session)
    }

    /// Clear `side`'s board and place a new fleet on it. This also wipes the
    /// board's shot history. A pending selection is left in place.
    pub fn reroll_board(&mut self, side: Side) -> Result<PlacementReport, BoardError> {
        let placed = self
            .placer
            .place_fleet(self.boards.get_mut(side), &mut self.rng);
        let report = match placed {
            Ok(report) => report,
            Err(e) => {
                // The failed run leaves the board cleared.
                self.renderer
                    .render(&BoardEvent::Rerolled { side }, &self.boards);
                return Err(e);
            }
        };
        log::info!("rerolled {} board ({} draws)", side, report.draws);
        self.renderer
            .render(&BoardEvent::Rerolled { side }, &self.boards);
        Ok(report)
    }

    /// Stage `(row, col)` on `side` for the next shot. Returns the selection
    /// it replaced.
    pub fn select_cell(
        &mut self,
        side: Side,
        row: usize,
        col: usize,
    ) -> Result<Option<Selection>, BoardError> {
        let coord = Coord::new(row, col)?;
        let previous = self.targeting.select(side, coord);
        let current = Selection { side, coord };
        self.renderer
            .render(&BoardEvent::Selected { current, previous }, &self.boards);
        Ok(previous)
    }

    /// Fire at the pending selection, if any.
    pub fn fire_at_selected(&mut self) -> FireOutcome {
        let pending = self.targeting.selection();
        let outcome = self.targeting.fire(&mut self.boards);
        match (pending, outcome.hit_result()) {
            (Some(selection), Some(result)) => {
                self.renderer
                    .render(&BoardEvent::Fired { selection, result }, &self.boards);
            }
            _ => log::debug!("fire with nothing selected"),
        }
        outcome
    }

    /// Ask the renderer to repaint both boards.
    pub fn redraw(&mut self) {
        self.renderer.render(&BoardEvent::Redraw, &self.boards);
    }

    pub fn boards(&self) -> &Boards {
        &self.boards
    }

    pub fn board(&self, side: Side) -> &Board {
        self.boards.get(side)
    }

    pub fn selection(&self) -> Option<Selection> {
        self.targeting.selection()
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut V {
        &mut self.renderer
    }

    /// End the session, handing back its renderer.
    pub fn into_renderer(self) -> V {
        self.renderer
    }
}
