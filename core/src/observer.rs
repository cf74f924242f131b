use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Receives the updates a presentation layer needs to stay in sync with a game.
pub trait GameObserver {
    fn cell_changed(&mut self, _coords: Coord2, _state: DisplayState) {}

    fn flag_budget_changed(&mut self, _budget: FlagBudget) {}

    /// Called exactly once per game.
    fn game_ended(&mut self, _won: bool) {}
}

/// Ignores every notification.
impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn cell_changed(&mut self, coords: Coord2, state: DisplayState) {
        (**self).cell_changed(coords, state);
    }

    fn flag_budget_changed(&mut self, budget: FlagBudget) {
        (**self).flag_budget_changed(budget);
    }

    fn game_ended(&mut self, won: bool) {
        (**self).game_ended(won);
    }
}

/// Owned form of a single observer callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    CellChanged { row: Coord, col: Coord, state: DisplayState },
    FlagBudgetChanged { budget: FlagBudget },
    GameEnded { won: bool },
}

/// Records every notification in order.
impl GameObserver for Vec<Notification> {
    fn cell_changed(&mut self, (row, col): Coord2, state: DisplayState) {
        self.push(Notification::CellChanged { row, col, state });
    }

    fn flag_budget_changed(&mut self, budget: FlagBudget) {
        self.push(Notification::FlagBudgetChanged { budget });
    }

    fn game_ended(&mut self, won: bool) {
        self.push(Notification::GameEnded { won });
    }
}
