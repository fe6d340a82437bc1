//! Symbol-phase move search: exhaustive minimax with a digit-sum
//! tie-break.
//!
//! The search reads a snapshot of the game state and returns a cell
//! index; it never mutates the live engine. The caller applies the
//! chosen cell through `GameEngine::place_symbol`, the same path a
//! human move takes.
//!
//! ## Scoring
//!
//! - Mover completes a line: `10 - depth` (prefer faster wins)
//! - Opponent completes a line: `depth - 10` (prefer slower losses)
//! - Full board, no line: `+2` / `-2` / `0` by comparing the digit
//!   sums under each symbol
//!
//! The tie-break weights (`±2`) sit far below a real line (`±10`): a
//! forced line always outranks any digit-sum edge.

use std::time::Instant;

use crate::core::{GameState, NumberGrid, Phase, Symbol, SymbolGrid, CELL_COUNT};
use crate::rules::Scores;

use super::stats::SearchStats;

/// Score for a completed line at the root, shrinking with depth.
const LINE_SCORE: i32 = 10;

/// Score edge for winning the digit-sum tie-break.
const TIE_BREAK_SCORE: i32 = 2;

/// Symbol-phase search context. Owns the statistics of the most recent
/// search.
#[derive(Clone, Debug, Default)]
pub struct SymbolSearch {
    stats: SearchStats,
}

impl SymbolSearch {
    /// Create a new search context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics from the most recent `choose` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose the best cell for the current player's mark.
    ///
    /// Returns `None` outside the symbols phase or when no empty cell
    /// remains. On the game's first symbol move the only legal cell is
    /// the one holding digit 1, so it is returned without searching.
    /// Equal scores keep the earlier index: the comparison is strictly
    /// greater-than.
    pub fn choose(&mut self, state: &GameState) -> Option<usize> {
        if state.phase() != Phase::Symbols || !state.is_active() {
            return None;
        }

        let start = Instant::now();
        self.stats.reset();

        let numbers = state.number_grid();
        let mut board = *state.symbol_grid();
        let mover = state.current_player().symbol();

        if board.is_empty() {
            self.stats.time_us = start.elapsed().as_micros() as u64;
            return numbers.position_of(1);
        }

        let mut best_cell = None;
        let mut best_score = i32::MIN;

        for index in board.empty_cells() {
            board.set(index, mover);
            let score = self.minimax(&mut board, numbers, 0, false, mover);
            board.clear(index);

            if score > best_score {
                best_score = score;
                best_cell = Some(index);
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best_cell
    }

    /// Recursive minimax over the empty cells.
    ///
    /// `depth` is 0 at the children of the search root and grows by
    /// one per ply. `maximizing` is true on the mover's hypothetical
    /// turns.
    fn minimax(
        &mut self,
        board: &mut SymbolGrid,
        numbers: &NumberGrid,
        depth: i32,
        maximizing: bool,
        mover: Symbol,
    ) -> i32 {
        self.stats.nodes += 1;

        if board.has_win_for(mover) {
            return LINE_SCORE - depth;
        }
        if board.has_win_for(mover.opponent()) {
            return depth - LINE_SCORE;
        }
        if board.is_full() {
            let scores = Scores::tally(numbers, board);
            let ours = scores.for_player(mover.player());
            let theirs = scores.for_player(mover.opponent().player());
            return match ours.cmp(&theirs) {
                std::cmp::Ordering::Greater => TIE_BREAK_SCORE,
                std::cmp::Ordering::Less => -TIE_BREAK_SCORE,
                std::cmp::Ordering::Equal => 0,
            };
        }

        if maximizing {
            let mut best = i32::MIN;
            for index in 0..CELL_COUNT {
                if board.is_empty_cell(index) {
                    board.set(index, mover);
                    best = best.max(self.minimax(board, numbers, depth + 1, false, mover));
                    board.clear(index);
                }
            }
            best
        } else {
            let opponent = mover.opponent();
            let mut best = i32::MAX;
            for index in 0..CELL_COUNT {
                if board.is_empty_cell(index) {
                    board.set(index, opponent);
                    best = best.min(self.minimax(board, numbers, depth + 1, true, mover));
                    board.clear(index);
                }
            }
            best
        }
    }
}
