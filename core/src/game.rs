use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Single game session: owns the board, keeps the counters and decides the end of the game.
///
/// Once the game is won or lost every further reveal or flag toggle is a
/// no-op. Updates are pushed to the observer `O` as they happen.
#[derive(Clone, Debug, PartialEq)]
pub struct Game<O = ()> {
    board: Board,
    remaining_to_expose: Saturating<CellCount>,
    flag_budget: FlagBudget,
    state: GameState,
    triggered_bomb: Option<Coord2>,
    observer: O,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self::with_observer(board, ())
    }
}

impl<O: GameObserver> Game<O> {
    pub fn with_observer(board: Board, observer: O) -> Self {
        let remaining_to_expose = Saturating(board.safe_cell_count() - board.exposed_safe_count());
        let flag_budget = FlagBudget::from(board.bomb_count()) - FlagBudget::from(board.flagged_count());
        log::debug!(
            "New game {:?}, {} cells to expose",
            board.config(),
            remaining_to_expose
        );
        Self {
            board,
            remaining_to_expose,
            flag_budget,
            state: Default::default(),
            triggered_bomb: None,
            observer,
        }
    }

    /// Generates a fresh board and starts a game on it.
    pub fn generate(
        config: GameConfig,
        generator: impl MinefieldGenerator,
        observer: O,
    ) -> Result<Self> {
        Ok(Self::with_observer(generator.generate(config)?, observer))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_bombs(&self) -> CellCount {
        self.board.bomb_count()
    }

    /// Safe cells that still have to be exposed to win.
    pub fn remaining_to_expose(&self) -> CellCount {
        self.remaining_to_expose.0
    }

    /// Bomb count minus placed flags, may go negative.
    pub fn flag_budget(&self) -> FlagBudget {
        self.flag_budget
    }

    pub fn triggered_bomb(&self) -> Option<Coord2> {
        self.triggered_bomb
    }

    pub fn display_at(&self, coords: Coord2) -> Result<DisplayState> {
        Ok(self.board.cell_at(coords)?.display_state())
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.is_ended() {
            return Ok(RevealOutcome::NoChange);
        }

        let report = self.board.reveal(coords, RevealMode::Play)?;
        for &pos in &report.exposed {
            self.remaining_to_expose -= 1;
            self.notify_cell(pos);
        }

        if let Some(bomb) = report.detonation() {
            self.notify_cell(bomb);
            self.triggered_bomb = Some(bomb);
            self.end_game(false);
            return Ok(RevealOutcome::HitBomb);
        }

        if report.exposed.is_empty() {
            Ok(RevealOutcome::NoChange)
        } else if self.remaining_to_expose.0 == 0 {
            self.end_game(true);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.is_ended() {
            return Ok(FlagOutcome::NoChange);
        }

        let outcome = self.board.toggle_flag(coords)?;
        if outcome.has_update() {
            self.flag_budget += outcome.budget_delta();
            self.notify_cell(coords);
            self.observer.flag_budget_changed(self.flag_budget);
        }
        Ok(outcome)
    }

    fn notify_cell(&mut self, coords: Coord2) {
        let state = self.board[coords].display_state();
        self.observer.cell_changed(coords, state);
    }

    /// Freezes the board, and on a loss surfaces every remaining bomb.
    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!("Game ended, state: {:?}", self.state);

        if !won {
            self.cleanup_sweep();
        }
        self.observer.game_ended(won);
    }

    fn cleanup_sweep(&mut self) {
        for coords in self.board.iter_coords() {
            // coordinates come from the board itself
            let Ok(report) = self.board.reveal(coords, RevealMode::Cleanup) else {
                continue;
            };
            debug_assert!(report.detonation().is_none() && report.exposed.is_empty());
            if let Some(bomb) = report.bomb {
                self.notify_cell(bomb);
            }
        }
    }
}
