//! Game configuration.
//!
//! Configuration is presentation-facing: the rules never branch on it.
//! `Mode` controls whether a UI hides the digits during the symbols
//! phase, and the vs-computer fields tell a caller when to consult the
//! move search. All of it survives `reset()`.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Display difficulty. `Hard` hides the digits once the symbols phase
/// starts; the rules engine carries it as passthrough only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Normal,
    Hard,
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Is the second seat controlled by the move search?
    pub vs_computer: bool,

    /// Which seat the human occupies in a vs-computer game.
    pub human_player: Player,

    /// Display difficulty (passthrough).
    pub mode: Mode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            vs_computer: false,
            human_player: Player::One,
            mode: Mode::Normal,
        }
    }
}

impl GameConfig {
    /// Create a local two-human configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a vs-computer game.
    #[must_use]
    pub fn vs_computer(mut self, human_player: Player) -> Self {
        self.vs_computer = true;
        self.human_player = human_player;
        self
    }

    /// Set the display mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Is the given player computer-controlled?
    #[must_use]
    pub fn is_bot(&self, player: Player) -> bool {
        self.vs_computer && player != self.human_player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert!(!config.vs_computer);
        assert_eq!(config.human_player, Player::One);
        assert_eq!(config.mode, Mode::Normal);
        assert!(!config.is_bot(Player::One));
        assert!(!config.is_bot(Player::Two));
    }

    #[test]
    fn test_vs_computer_builder() {
        let config = GameConfig::new().vs_computer(Player::One);
        assert!(config.vs_computer);
        assert!(!config.is_bot(Player::One));
        assert!(config.is_bot(Player::Two));

        let swapped = GameConfig::new().vs_computer(Player::Two);
        assert!(swapped.is_bot(Player::One));
        assert!(!swapped.is_bot(Player::Two));
    }

    #[test]
    fn test_mode_builder() {
        let config = GameConfig::new().with_mode(Mode::Hard);
        assert_eq!(config.mode, Mode::Hard);
    }
}
