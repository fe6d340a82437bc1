//! Aggregate game state.
//!
//! One `GameState` value per game, owned by the rules engine and
//! mutated only through its commands. Fields are crate-private so a
//! caller cannot break the invariants the engine maintains (digit/used-
//! set agreement, monotonic phase, single deactivation); read access
//! goes through the query methods.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::grid::{NumberGrid, NumberSet, SymbolGrid};
use super::player::Player;

/// Game phase. Strictly monotonic: numbers, then symbols, then
/// finished. There is no regression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Players are placing the digits 1-9.
    #[default]
    Numbers,
    /// Players are placing X/O marks.
    Symbols,
    /// The game has concluded.
    Finished,
}

/// Complete state of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) number_grid: NumberGrid,
    pub(crate) symbol_grid: SymbolGrid,
    pub(crate) current_player: Player,
    pub(crate) phase: Phase,
    pub(crate) used_numbers: NumberSet,
    pub(crate) selected_number: Option<u8>,
    pub(crate) last_number_placer: Option<Player>,
    pub(crate) active: bool,
    pub(crate) config: GameConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    /// Create a fresh game with the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            number_grid: NumberGrid::new(),
            symbol_grid: SymbolGrid::new(),
            current_player: Player::One,
            phase: Phase::Numbers,
            used_numbers: NumberSet::new(),
            selected_number: None,
            last_number_placer: None,
            active: true,
            config,
        }
    }

    /// Return to initial values, preserving the configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// The digit grid.
    #[must_use]
    pub fn number_grid(&self) -> &NumberGrid {
        &self.number_grid
    }

    /// The mark grid.
    #[must_use]
    pub fn symbol_grid(&self) -> &SymbolGrid {
        &self.symbol_grid
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Digits already placed.
    #[must_use]
    pub fn used_numbers(&self) -> NumberSet {
        self.used_numbers
    }

    /// The pending digit selection, if any.
    #[must_use]
    pub fn selected_number(&self) -> Option<u8> {
        self.selected_number
    }

    /// Who placed the most recent digit. Determines who opens the
    /// symbols phase: the *other* player starts.
    #[must_use]
    pub fn last_number_placer(&self) -> Option<Player> {
        self.last_number_placer
    }

    /// False once the game has concluded.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Is it currently a computer-controlled player's turn?
    #[must_use]
    pub fn is_bot_turn(&self) -> bool {
        self.active && self.config.is_bot(self.current_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Mode;

    #[test]
    fn test_fresh_state() {
        let state = GameState::default();
        assert_eq!(state.phase(), Phase::Numbers);
        assert_eq!(state.current_player(), Player::One);
        assert!(state.is_active());
        assert!(state.used_numbers().is_empty());
        assert_eq!(state.selected_number(), None);
        assert_eq!(state.last_number_placer(), None);
        assert!(state.symbol_grid().is_empty());
    }

    #[test]
    fn test_reset_preserves_config() {
        let config = GameConfig::new()
            .vs_computer(Player::Two)
            .with_mode(Mode::Hard);
        let mut state = GameState::new(config);

        state.current_player = Player::Two;
        state.phase = Phase::Symbols;
        state.active = false;

        state.reset();

        assert_eq!(state.phase(), Phase::Numbers);
        assert_eq!(state.current_player(), Player::One);
        assert!(state.is_active());
        assert_eq!(*state.config(), config);
    }

    #[test]
    fn test_is_bot_turn() {
        let mut state = GameState::new(GameConfig::new().vs_computer(Player::One));
        assert!(!state.is_bot_turn());

        state.current_player = Player::Two;
        assert!(state.is_bot_turn());

        state.active = false;
        assert!(!state.is_bot_turn());
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::default();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
