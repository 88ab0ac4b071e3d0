use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{MoveError, ParseBoardError};

use super::{
    BOARD_WIDTH, CELL_COUNT,
    cell::{CellState, Mark},
    evaluator::{GameState, evaluate},
};

/// Indices of blank cells, in ascending order.
pub type BlankCells = ArrayVec<usize, CELL_COUNT>;

/// Result of a successful [`Board::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct MoveOutcome {
    /// Cell the player marked.
    pub cell: usize,
    /// Symbol the player placed.
    pub player: Mark,
    /// Cell the auto-responder marked with `O`, if any blank cell was left.
    pub response: Option<usize>,
}

/// A 3×3 tic-tac-toe grid.
///
/// Cells are stored row by row; index 0 is the top-left corner and index 8 the
/// bottom-right. The game state is never stored: [`Board::game_state`] derives it
/// from the cells each time it is asked.
///
/// # Auto-response
///
/// [`Board::apply_move`] places the player's mark and then lets the auto-responder
/// mark one uniformly chosen blank cell with `O`. The response is always `O`, even
/// when the player itself placed `O`. [`Board::place`] and [`Board::auto_respond`]
/// expose the two steps separately.
///
/// # Example
///
/// ```
/// use oxitac_engine::{Board, GameState, Mark};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
///
/// let mut rng = Pcg32::seed_from_u64(7);
/// let mut board = Board::new();
///
/// let outcome = board.apply_move(4, Mark::X, &mut rng).unwrap();
/// assert!(outcome.response.is_some());
/// assert_eq!(board.game_state(), GameState::StillPlaying);
/// assert!(board.is_disabled(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [CellState; CELL_COUNT],
}

impl Board {
    pub const CELL_COUNT: usize = CELL_COUNT;
    pub const WIDTH: usize = BOARD_WIDTH;

    /// A board with every cell blank.
    pub const EMPTY: Self = Self {
        cells: [CellState::Blank; CELL_COUNT],
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Builds a board from raw cells. The board need not be reachable by legal play.
    #[must_use]
    pub const fn from_cells(cells: [CellState; CELL_COUNT]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub const fn cells(&self) -> &[CellState; CELL_COUNT] {
        &self.cells
    }

    /// Returns the cell at `index`, or `None` when the index is out of range.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<CellState> {
        self.cells.get(index).copied()
    }

    /// Returns an iterator over the three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH)
    }

    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    #[must_use]
    pub fn blank_cells(&self) -> BlankCells {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.is_blank().then_some(i))
            .collect()
    }

    #[must_use]
    pub fn has_blank(&self) -> bool {
        self.cells.iter().any(CellState::is_blank)
    }

    /// Places `player` on `cell` without triggering the auto-response.
    ///
    /// The board is left untouched when the move is rejected.
    pub fn place(&mut self, cell: usize, player: Mark) -> Result<(), MoveError> {
        let target = self.cells.get_mut(cell).ok_or(MoveError::OutOfRangeCell { cell })?;
        if !target.is_blank() {
            return Err(MoveError::CellOccupied { cell });
        }
        *target = player.into();
        tracing::trace!(cell, %player, "placed mark");
        Ok(())
    }

    /// Marks one uniformly chosen blank cell with `O`.
    ///
    /// Returns the chosen cell, or `None` if the board has no blank cell left.
    pub fn auto_respond<R>(&mut self, rng: &mut R) -> Option<usize>
    where
        R: Rng + ?Sized,
    {
        let blanks = self.blank_cells();
        if blanks.is_empty() {
            return None;
        }
        let cell = blanks[rng.random_range(0..blanks.len())];
        self.cells[cell] = CellState::O;
        tracing::trace!(cell, "auto-responder placed O");
        Some(cell)
    }

    /// Places `player` on `cell`, then runs the auto-response.
    ///
    /// The move is validated before anything changes: an out-of-range or
    /// occupied cell leaves the board as it was. Moves on a board whose game
    /// is already decided are accepted as long as the target cell is blank.
    pub fn apply_move<R>(
        &mut self,
        cell: usize,
        player: Mark,
        rng: &mut R,
    ) -> Result<MoveOutcome, MoveError>
    where
        R: Rng + ?Sized,
    {
        if let Err(err) = self.place(cell, player) {
            tracing::debug!(cell, %player, %err, "rejected move");
            return Err(err);
        }
        let response = self.auto_respond(rng);
        tracing::debug!(cell, %player, ?response, "applied move");
        Ok(MoveOutcome {
            cell,
            player,
            response,
        })
    }

    #[must_use]
    pub fn game_state(&self) -> GameState {
        evaluate(&self.cells)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_state().is_finished()
    }

    /// Returns `true` if `cell` cannot be played: it is occupied, the game is
    /// over, or the index is out of range.
    #[must_use]
    pub fn is_disabled(&self, cell: usize) -> bool {
        self.cell(cell).is_none_or(|c| !c.is_blank()) || self.is_game_over()
    }

    /// Parses a board from text.
    ///
    /// Nine cell characters are read in row order (see [`CellState::from_char`]).
    /// Whitespace and the grid characters `|`, `/`, `-`, `+` are ignored, so both
    /// `"XXXO.O..."` and the [`Display`](fmt::Display) output of a board parse.
    pub fn from_ascii(art: &str) -> Result<Self, ParseBoardError> {
        let mut cells = [CellState::Blank; CELL_COUNT];
        let mut found = 0;
        for ch in art
            .chars()
            .filter(|ch| !ch.is_whitespace() && !matches!(ch, '|' | '/' | '-' | '+'))
        {
            let state =
                CellState::from_char(ch).ok_or(ParseBoardError::InvalidCell { ch, index: found })?;
            if let Some(cell) = cells.get_mut(found) {
                *cell = state;
            }
            found += 1;
        }
        if found != CELL_COUNT {
            return Err(ParseBoardError::WrongCellCount { found });
        }
        Ok(Self { cells })
    }

    /// Returns the nine cell characters in row order, e.g. `"XXXO.O..."`.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        self.cells.iter().map(|c| c.as_char()).collect()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, "|")?;
                }
                write!(f, " {cell} ")?;
            }
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_compact_string())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_ascii(&s)
            .map_err(|e| serde::de::Error::custom(format!("invalid board {s:?}: {e}")))
    }
}
