//! Rules engine: placement commands, phase transitions, terminal
//! evaluation.

pub mod engine;
pub mod outcome;

pub use engine::GameEngine;
pub use outcome::{
    MoveError, PlaceNumberOutcome, PlaceSymbolOutcome, Scores, TerminalResult,
};
