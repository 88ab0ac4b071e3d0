//! Board representation and win detection.
//!
//! - [`CellState`] / [`Mark`] - contents of a single cell and the symbol a player places
//! - [`Board`] - the 3×3 grid, move application and derived queries
//! - [`GameState`] - win/tie/in-progress classification computed from a board
//!
//! Cells are indexed 0-8, row by row:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

pub use self::{board::*, cell::*, evaluator::GameState, line::*};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod evaluator;
pub(crate) mod line;

/// Number of cells on a board.
pub const CELL_COUNT: usize = 9;
/// Number of cells in a row.
pub const BOARD_WIDTH: usize = 3;
