//! The opponent decision layer.
//!
//! Two independent procedures, one per phase:
//!
//! - `choose_number_move`: a fixed heuristic (largest unused digit,
//!   center > corners > edges)
//! - `SymbolSearch`: exhaustive minimax with a digit-sum tie-break
//!
//! Both read snapshots of the game state and return moves for the
//! caller to apply through the rules engine; neither mutates live
//! game state.

pub mod placement;
pub mod search;
pub mod stats;

pub use placement::{choose_number_move, NumberMove};
pub use search::SymbolSearch;
pub use stats::SearchStats;
