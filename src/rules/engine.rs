//! The rules engine: phase transitions, placement validation, win and
//! tie detection.
//!
//! `GameEngine` is the single owner of a `GameState`; every mutation
//! goes through its commands, whether the move came from a human or
//! from the move search. Rejected commands never mutate and never
//! panic; they return `Err(MoveError)` so the caller can simply
//! re-prompt.

use crate::core::{GameConfig, GameState, Mode, Player, Phase, CELL_COUNT};

use super::outcome::{
    MoveError, PlaceNumberOutcome, PlaceSymbolOutcome, Scores, TerminalResult,
};

/// Single-owner controller for one game.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Create an engine with a fresh game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
        }
    }

    /// Read access to the full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Set the vs-computer seating. Takes effect immediately and
    /// survives `reset`.
    pub fn configure(&mut self, vs_computer: bool, human_player: Player) {
        self.state.config.vs_computer = vs_computer;
        self.state.config.human_player = human_player;
    }

    /// Set the display mode (passthrough; the rules ignore it).
    pub fn set_mode(&mut self, mode: Mode) {
        self.state.config.mode = mode;
    }

    /// Select a digit to place next.
    ///
    /// Valid only during the numbers phase, for a digit 1-9 that has
    /// not been used. Selecting again replaces the pending selection.
    pub fn select_number(&mut self, number: u8) -> Result<(), MoveError> {
        if self.state.phase != Phase::Numbers
            || !(1..=9).contains(&number)
            || self.state.used_numbers.contains(number)
        {
            return Err(MoveError::InvalidNumberSelection);
        }

        self.state.selected_number = Some(number);
        Ok(())
    }

    /// Place the selected digit into a cell.
    ///
    /// The ninth digit ends the numbers phase, and the player who did
    /// *not* place it opens the symbols phase.
    pub fn place_number(&mut self, index: usize) -> Result<PlaceNumberOutcome, MoveError> {
        if self.state.phase != Phase::Numbers {
            return Err(MoveError::WrongPhase);
        }
        // Out-of-range indices are rejected like occupied cells.
        if index >= CELL_COUNT || !self.state.number_grid.is_empty_cell(index) {
            return Err(MoveError::CellOccupied);
        }
        let number = self.state.selected_number.ok_or(MoveError::NoSelection)?;

        self.state.number_grid.set(index, number);
        self.state.used_numbers.insert(number);
        self.state.last_number_placer = Some(self.state.current_player);
        self.state.selected_number = None;

        if self.state.used_numbers.is_full() {
            self.start_symbol_phase();
            Ok(PlaceNumberOutcome { phase_changed: true })
        } else {
            self.state.current_player = self.state.current_player.other();
            Ok(PlaceNumberOutcome {
                phase_changed: false,
            })
        }
    }

    /// The player who did not place the ninth digit starts the symbols
    /// phase. Non-obvious but deliberate: placing last costs the
    /// opening symbol move.
    fn start_symbol_phase(&mut self) {
        self.state.phase = Phase::Symbols;
        if let Some(placer) = self.state.last_number_placer {
            self.state.current_player = placer.other();
        }
    }

    /// Place the current player's mark into a cell.
    ///
    /// The game's very first symbol placement must land on the cell
    /// holding digit 1; anywhere else is rejected without mutation or
    /// turn change. On success the terminal condition is evaluated,
    /// and the turn passes only if the game continues.
    pub fn place_symbol(&mut self, index: usize) -> Result<PlaceSymbolOutcome, MoveError> {
        if !self.state.active {
            return Err(MoveError::GameOver);
        }
        if self.state.phase != Phase::Symbols {
            return Err(MoveError::WrongPhase);
        }
        if index >= CELL_COUNT || !self.state.symbol_grid.is_empty_cell(index) {
            return Err(MoveError::CellOccupied);
        }
        if self.state.symbol_grid.is_empty()
            && self.state.number_grid.position_of(1) != Some(index)
        {
            return Err(MoveError::FirstMoveViolation);
        }

        let symbol = self.state.current_player.symbol();
        self.state.symbol_grid.set(index, symbol);

        let terminal = self.check_result();
        if !terminal.is_over() {
            self.state.current_player = self.state.current_player.other();
        }

        Ok(PlaceSymbolOutcome { symbol, terminal })
    }

    /// Evaluate the terminal condition and conclude the game if it is
    /// met.
    ///
    /// Lines are scanned in the fixed `WINNING_LINES` order; the first
    /// complete line wins. A full board with no line falls back to the
    /// digit sums under each player's marks.
    pub fn check_result(&mut self) -> TerminalResult {
        let result = if let Some((line, symbol)) = self.state.symbol_grid.winning_line() {
            TerminalResult::Won {
                winner: symbol.player(),
                line,
            }
        } else if self.state.symbol_grid.is_full() {
            TerminalResult::Tie {
                scores: self.calculate_scores(),
            }
        } else {
            TerminalResult::InProgress
        };

        if result.is_over() && self.state.active {
            self.state.active = false;
            self.state.phase = Phase::Finished;
        }

        result
    }

    /// Digit sums under each player's marks.
    #[must_use]
    pub fn calculate_scores(&self) -> Scores {
        Scores::tally(&self.state.number_grid, &self.state.symbol_grid)
    }

    /// Start over. Grids, phase, turn, and the active flag return to
    /// their initial values; configuration is preserved.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
