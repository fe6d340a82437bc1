//! Command outcomes, terminal results, and the rejection taxonomy.
//!
//! Every rejected command is a no-op surfaced as `Err(MoveError)`. None
//! of them is fatal: the caller re-prompts and tries again, which is
//! exactly what happens when a user clicks an occupied cell.

use serde::{Deserialize, Serialize};

use crate::core::{NumberGrid, Player, Symbol, SymbolGrid, CELL_COUNT};

/// Why a command was rejected. All variants are locally recoverable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// Digit out of range, already used, or selected outside the
    /// numbers phase.
    InvalidNumberSelection,
    /// Target cell already holds a digit or a mark.
    CellOccupied,
    /// The game's first symbol placement must land on the cell holding
    /// digit 1.
    FirstMoveViolation,
    /// A digit placement was attempted with no digit selected.
    NoSelection,
    /// The command does not apply to the current phase.
    WrongPhase,
    /// The game has already concluded.
    GameOver,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidNumberSelection => write!(f, "invalid number selection"),
            MoveError::CellOccupied => write!(f, "cell is already occupied"),
            MoveError::FirstMoveViolation => {
                write!(f, "first symbol must be placed on the cell holding 1")
            }
            MoveError::NoSelection => write!(f, "no number selected"),
            MoveError::WrongPhase => write!(f, "command not valid in this phase"),
            MoveError::GameOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Result of a successful digit placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceNumberOutcome {
    /// True when this was the ninth digit and the game moved to the
    /// symbols phase.
    pub phase_changed: bool,
}

/// Result of a successful symbol placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSymbolOutcome {
    /// The mark that was written.
    pub symbol: Symbol,
    /// Terminal evaluation after the placement.
    pub terminal: TerminalResult,
}

/// Per-player sums of the digits under each player's marks.
///
/// Only consulted when the board fills with no winning line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player_one: u32,
    pub player_two: u32,
}

impl Scores {
    /// Sum the digits under each player's marks.
    #[must_use]
    pub fn tally(numbers: &NumberGrid, symbols: &SymbolGrid) -> Self {
        let mut scores = Scores::default();
        for i in 0..CELL_COUNT {
            let digit = u32::from(numbers.get(i).unwrap_or(0));
            match symbols.get(i) {
                Some(Symbol::O) => scores.player_one += digit,
                Some(Symbol::X) => scores.player_two += digit,
                None => {}
            }
        }
        scores
    }

    /// The score for one player.
    #[must_use]
    pub fn for_player(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// The player with the strictly higher sum, or `None` on a true tie.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        match self.player_one.cmp(&self.player_two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Terminal evaluation of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalResult {
    /// The game continues.
    InProgress,
    /// A player completed a line.
    Won { winner: Player, line: [usize; 3] },
    /// The board filled with no line; digits decide.
    Tie { scores: Scores },
}

impl TerminalResult {
    /// Has the game concluded?
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, TerminalResult::InProgress)
    }
}
