//! Player identity and symbol mapping.
//!
//! ## Player
//!
//! Exactly two players. `Player::One` always moves first in the numbers
//! phase; who opens the symbols phase depends on who placed the ninth
//! number (see `GameState`).
//!
//! ## Symbol
//!
//! The symbol mapping is fixed and deliberately swapped from the
//! conventional default: Player One marks with `O`, Player Two with `X`.
//! Scoring and win detection rely on this mapping staying fixed.

use serde::{Deserialize, Serialize};

/// One of the two player identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The symbol this player marks cells with.
    ///
    /// Player One uses `O` and Player Two uses `X` (swapped from the
    /// usual convention).
    #[must_use]
    pub const fn symbol(self) -> Symbol {
        match self {
            Player::One => Symbol::O,
            Player::Two => Symbol::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// A mark on the symbol grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Get the opposing symbol.
    #[must_use]
    pub const fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// The player who owns this symbol.
    #[must_use]
    pub const fn player(self) -> Player {
        match self {
            Symbol::O => Player::One,
            Symbol::X => Player::Two,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}
