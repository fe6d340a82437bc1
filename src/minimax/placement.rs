//! Number-phase placement heuristic.
//!
//! No search here: the bot always plays the largest unused digit to
//! maximize its tie-break potential, and drops it center-first, then
//! on a random empty corner, then on a random empty edge. Intentionally
//! simple; the symbols phase is where the real decisions happen.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, GameState, Phase, CENTER, CORNERS, EDGES};

/// A digit placement chosen by the heuristic. The caller applies it
/// through `GameEngine::select_number` + `GameEngine::place_number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberMove {
    /// The digit to select (always the largest unused).
    pub number: u8,
    /// The cell to place it on.
    pub cell: usize,
}

/// Choose the next digit move, or `None` outside the numbers phase or
/// when the grid is full.
pub fn choose_number_move(state: &GameState, rng: &mut GameRng) -> Option<NumberMove> {
    if state.phase() != Phase::Numbers {
        return None;
    }

    let number = state.used_numbers().largest_unused()?;
    let grid = state.number_grid();

    let cell = if grid.is_empty_cell(CENTER) {
        CENTER
    } else {
        let corners: SmallVec<[usize; 4]> = CORNERS
            .iter()
            .copied()
            .filter(|&i| grid.is_empty_cell(i))
            .collect();
        if let Some(&corner) = rng.choose(&corners) {
            corner
        } else {
            let edges: SmallVec<[usize; 4]> = EDGES
                .iter()
                .copied()
                .filter(|&i| grid.is_empty_cell(i))
                .collect();
            *rng.choose(&edges)?
        }
    };

    Some(NumberMove { number, cell })
}
