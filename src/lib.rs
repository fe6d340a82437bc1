//! # numtac
//!
//! Rules engine and opponent for a two-phase variant of tic-tac-toe:
//! players first place the digits 1-9 into the nine cells, then place
//! X/O marks onto that same grid. Three in a line still wins; a full
//! board with no line goes to whoever's marks cover the larger digit
//! sum.
//!
//! ## Design Principles
//!
//! 1. **Pure state + decision logic**: no rendering, input, or I/O.
//!    A UI shell drives the engine through commands and reads state
//!    back through queries.
//!
//! 2. **One mutation path**: human moves and bot moves both go through
//!    the same engine commands; the search only ever reads snapshots.
//!
//! 3. **Rejections are no-ops**: invalid commands return an error and
//!    change nothing, so untrusted input (a click on an occupied cell)
//!    needs no special-casing upstream.
//!
//! ## House Rules
//!
//! - The symbol mapping is swapped: Player One marks `O`, Player Two
//!   marks `X`.
//! - Whoever did *not* place the ninth digit opens the symbols phase.
//! - The game's first mark must land on the cell holding digit 1.
//!
//! ## Modules
//!
//! - `core`: players, grids, configuration, state, RNG
//! - `rules`: placement commands, phase transitions, terminal checks
//! - `minimax`: the opponent (digit heuristic + minimax mark search)
//! - `session`: facade wiring engine and opponent together

pub mod core;
pub mod minimax;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameState, Mode, NumberGrid, NumberSet, Phase, Player, Symbol,
    SymbolGrid, CELL_COUNT, CENTER, CORNERS, EDGES, WINNING_LINES,
};

pub use crate::rules::{
    GameEngine, MoveError, PlaceNumberOutcome, PlaceSymbolOutcome, Scores, TerminalResult,
};

pub use crate::minimax::{choose_number_move, NumberMove, SearchStats, SymbolSearch};

pub use crate::session::{BotMove, GameSession};
