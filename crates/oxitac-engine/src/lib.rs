pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("cell {cell} is out of range (expected 0..=8)")]
    OutOfRangeCell { cell: usize },
    #[display("cell {cell} is already occupied")]
    CellOccupied { cell: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell state {input:?} (expected one of X, O, .)")]
pub struct ParseCellStateError {
    pub(crate) input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("invalid cell character {ch:?} at cell {index}")]
    InvalidCell { ch: char, index: usize },
    #[display("expected 9 cells, got {found}")]
    WrongCellCount { found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed {input:?}: expected 1 to 32 hex digits")]
pub struct ParseSeedError {
    pub(crate) input: String,
}
