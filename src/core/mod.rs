//! Foundational types: players, grids, configuration, state, RNG.

pub mod config;
pub mod grid;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, Mode};
pub use grid::{
    CellList, NumberGrid, NumberSet, SymbolGrid, CELL_COUNT, CENTER, CORNERS, EDGES,
    WINNING_LINES,
};
pub use player::{Player, Symbol};
pub use rng::GameRng;
pub use state::{GameState, Phase};
