//! Select-then-fire targeting.

use crate::board::Boards;
use crate::common::{Coord, HitResult, Side};

/// The single cell staged for the next shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub side: Side,
    pub coord: Coord,
}

/// Result of a fire command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    Hit,
    Miss,
    /// Nothing was selected.
    NoOp,
}

impl FireOutcome {
    /// The shot result, `None` for `NoOp`.
    pub fn hit_result(&self) -> Option<HitResult> {
        match self {
            FireOutcome::Hit => Some(HitResult::Hit),
            FireOutcome::Miss => Some(HitResult::Miss),
            FireOutcome::NoOp => None,
        }
    }
}

impl From<HitResult> for FireOutcome {
    fn from(r: HitResult) -> Self {
        match r {
            HitResult::Hit => FireOutcome::Hit,
            HitResult::Miss => FireOutcome::Miss,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TargetState {
    #[default]
    Idle,
    Selected(Selection),
}

/// Tracks at most one selected cell and resolves shots against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetingSession {
    state: TargetState,
}

impl TargetingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `coord` on `side`, replacing any earlier selection. Returns the
    /// replaced selection so its highlight can be removed.
    pub fn select(&mut self, side: Side, coord: Coord) -> Option<Selection> {
        let previous = self.selection();
        self.state = TargetState::Selected(Selection { side, coord });
        previous
    }

    pub fn selection(&self) -> Option<Selection> {
        match self.state {
            TargetState::Idle => None,
            TargetState::Selected(sel) => Some(sel),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == TargetState::Idle
    }

    /// Drop the selection without firing.
    pub fn clear(&mut self) -> Option<Selection> {
        let previous = self.selection();
        self.state = TargetState::Idle;
        previous
    }

    /// Fire at the selected cell and go back to idle. When idle this is a
    /// no-op and no board is touched.
    pub fn fire(&mut self, boards: &mut Boards) -> FireOutcome {
        let Some(sel) = self.clear() else {
            return FireOutcome::NoOp;
        };
        let result = boards.get_mut(sel.side).fire(sel.coord);
        log::debug!("fired at {} on {} board: {:?}", sel.coord, sel.side, result);
        result.into()
    }
}
