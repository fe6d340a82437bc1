//! Session facade: one game, its engine, and the bot.
//!
//! A `GameSession` is what a UI shell talks to. Human input goes
//! straight to the engine commands; when the mover is computer-
//! controlled, `bot_move` consults the decision layer and applies the
//! chosen move *through those same commands*, so there is exactly one
//! mutation path no matter who is playing. Pacing (the original pauses
//! briefly before the bot answers) is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, GameState, Mode, Phase, Player};
use crate::minimax::{choose_number_move, NumberMove, SearchStats, SymbolSearch};
use crate::rules::{
    GameEngine, MoveError, PlaceNumberOutcome, PlaceSymbolOutcome, Scores,
};

/// A move made by the bot, with the engine outcome of applying it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotMove {
    /// A digit placement during the numbers phase.
    Number {
        number: u8,
        cell: usize,
        outcome: PlaceNumberOutcome,
    },
    /// A mark placement during the symbols phase.
    Symbol {
        cell: usize,
        outcome: PlaceSymbolOutcome,
    },
}

/// One game session: engine, search context, and seeded RNG.
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: GameEngine,
    search: SymbolSearch,
    rng: GameRng,
}

impl GameSession {
    /// Create a session. The seed drives only the number-phase
    /// placement heuristic's corner/edge picks.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            engine: GameEngine::new(config),
            search: SymbolSearch::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Read access to the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Set the vs-computer seating.
    pub fn configure(&mut self, vs_computer: bool, human_player: Player) {
        self.engine.configure(vs_computer, human_player);
    }

    /// Set the display mode (passthrough).
    pub fn set_mode(&mut self, mode: Mode) {
        self.engine.set_mode(mode);
    }

    /// Select a digit to place next.
    pub fn select_number(&mut self, number: u8) -> Result<(), MoveError> {
        self.engine.select_number(number)
    }

    /// Place the selected digit.
    pub fn place_number(&mut self, index: usize) -> Result<PlaceNumberOutcome, MoveError> {
        self.engine.place_number(index)
    }

    /// Place the current player's mark.
    pub fn place_symbol(&mut self, index: usize) -> Result<PlaceSymbolOutcome, MoveError> {
        self.engine.place_symbol(index)
    }

    /// Digit sums under each player's marks.
    #[must_use]
    pub fn scores(&self) -> Scores {
        self.engine.calculate_scores()
    }

    /// Start the game over, keeping the configuration.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Is it a computer-controlled player's turn?
    #[must_use]
    pub fn is_bot_turn(&self) -> bool {
        self.state().is_bot_turn()
    }

    /// Ask the heuristic for a digit move without applying it.
    pub fn choose_number_move(&mut self) -> Option<NumberMove> {
        choose_number_move(self.engine.state(), &mut self.rng)
    }

    /// Ask the minimax search for a mark cell without applying it.
    pub fn choose_symbol_move(&mut self) -> Option<usize> {
        self.search.choose(self.engine.state())
    }

    /// Statistics from the most recent symbol search.
    #[must_use]
    pub fn search_stats(&self) -> &SearchStats {
        self.search.stats()
    }

    /// Compute and apply the bot's move for the current phase.
    ///
    /// Returns `None` when the mover is not computer-controlled or the
    /// game is over. The chosen move is applied through the ordinary
    /// engine commands.
    pub fn bot_move(&mut self) -> Option<BotMove> {
        if !self.is_bot_turn() {
            return None;
        }

        match self.state().phase() {
            Phase::Numbers => {
                let mv = choose_number_move(self.engine.state(), &mut self.rng)?;
                self.engine.select_number(mv.number).ok()?;
                let outcome = self.engine.place_number(mv.cell).ok()?;
                Some(BotMove::Number {
                    number: mv.number,
                    cell: mv.cell,
                    outcome,
                })
            }
            Phase::Symbols => {
                let cell = self.search.choose(self.engine.state())?;
                let outcome = self.engine.place_symbol(cell).ok()?;
                Some(BotMove::Symbol { cell, outcome })
            }
            Phase::Finished => None,
        }
    }
}
