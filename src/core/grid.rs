//! The 3x3 board: cell geometry, the two parallel grids, and the
//! used-number set.
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! Two grids share this geometry: `NumberGrid` holds the digits 1-9
//! placed during the numbers phase, `SymbolGrid` holds the X/O marks
//! placed during the symbols phase. A digit is placed at most once;
//! `NumberSet` tracks which digits have been used.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Symbol;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The center cell index.
pub const CENTER: usize = 4;

/// Corner cell indices.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge (non-corner, non-center) cell indices.
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// The 8 winning lines, enumerated rows first, then columns, then
/// diagonals. Win detection scans them in exactly this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Candidate-cell list. Never exceeds the board size, so it lives on
/// the stack.
pub type CellList = SmallVec<[usize; CELL_COUNT]>;

/// The grid of placed digits.
///
/// Each slot is either empty or a digit 1-9; the rules engine
/// guarantees each digit appears at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberGrid {
    cells: [Option<u8>; CELL_COUNT],
}

impl NumberGrid {
    /// Create an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Get the digit at a cell.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.cells[index]
    }

    /// Write a digit into a cell. Callers validate emptiness first.
    pub fn set(&mut self, index: usize, number: u8) {
        self.cells[index] = Some(number);
    }

    /// Is the cell empty?
    #[must_use]
    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Find the cell holding a given digit.
    #[must_use]
    pub fn position_of(&self, number: u8) -> Option<usize> {
        self.cells.iter().position(|&c| c == Some(number))
    }

    /// Indices of all empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        (0..CELL_COUNT)
            .filter(|&i| self.cells[i].is_none())
            .collect()
    }
}

/// The grid of X/O marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolGrid {
    cells: [Option<Symbol>; CELL_COUNT],
}

impl SymbolGrid {
    /// Create an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Get the symbol at a cell.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.cells[index]
    }

    /// Write a symbol into a cell. Callers validate emptiness first.
    pub fn set(&mut self, index: usize, symbol: Symbol) {
        self.cells[index] = Some(symbol);
    }

    /// Clear a cell. Used by the search to undo hypothetical moves.
    pub fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    /// Is the cell empty?
    #[must_use]
    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Are all cells empty? True only before the game's first symbol
    /// placement, which is forced onto the cell holding digit 1.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Are all cells filled?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Indices of all empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        (0..CELL_COUNT)
            .filter(|&i| self.cells[i].is_none())
            .collect()
    }

    /// First winning line held by any symbol, in `WINNING_LINES` order.
    #[must_use]
    pub fn winning_line(&self) -> Option<([usize; 3], Symbol)> {
        for line in WINNING_LINES {
            let [a, b, c] = line;
            if let Some(symbol) = self.cells[a] {
                if self.cells[b] == Some(symbol) && self.cells[c] == Some(symbol) {
                    return Some((line, symbol));
                }
            }
        }
        None
    }

    /// Does `symbol` hold three in a line?
    #[must_use]
    pub fn has_win_for(&self, symbol: Symbol) -> bool {
        WINNING_LINES
            .iter()
            .any(|&[a, b, c]| {
                self.cells[a] == Some(symbol)
                    && self.cells[b] == Some(symbol)
                    && self.cells[c] == Some(symbol)
            })
    }
}

/// The set of digits 1-9 already placed, as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSet(u16);

impl NumberSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a digit to the set.
    pub fn insert(&mut self, number: u8) {
        debug_assert!((1..=9).contains(&number));
        self.0 |= 1 << number;
    }

    /// Is the digit in the set?
    #[must_use]
    pub const fn contains(self, number: u8) -> bool {
        self.0 & (1 << number) != 0
    }

    /// Number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Is the set empty?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Are all nine digits used?
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.len() == CELL_COUNT
    }

    /// The largest digit not yet in the set.
    #[must_use]
    pub fn largest_unused(self) -> Option<u8> {
        (1..=9).rev().find(|&n| !self.contains(n))
    }

    /// Iterate over the digits in the set, ascending.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9).filter(move |&n| self.contains(n))
    }
}
