//! Notifications sent to whatever draws the boards.

use crate::board::Boards;
use crate::common::{HitResult, Side};
use crate::targeting::Selection;

/// A change the renderer should reflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// The side's board was cleared and re-placed; all 100 cells changed.
    Rerolled { side: Side },
    /// A new cell is staged. `previous` needs its highlight removed.
    Selected {
        current: Selection,
        previous: Option<Selection>,
    },
    /// The selected cell was fired at and the selection cleared.
    Fired {
        selection: Selection,
        result: HitResult,
    },
    /// Repaint everything.
    Redraw,
}

/// Receives board events. The renderer reads cell state from `boards`; the
/// core never reads anything back from it.
pub trait BoardRenderer {
    fn render(&mut self, event: &BoardEvent, boards: &Boards);
}

impl<T: BoardRenderer + ?Sized> BoardRenderer for &mut T {
    fn render(&mut self, event: &BoardEvent, boards: &Boards) {
        (**self).render(event, boards)
    }
}

/// Renderer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl BoardRenderer for NullRenderer {
    fn render(&mut self, _event: &BoardEvent, _boards: &Boards) {}
}
