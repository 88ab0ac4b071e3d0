use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseCellStateError;

/// Symbol placed by a player.
///
/// `X` is the human side. `O` is the side played by the auto-responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, derive_more::IsVariant)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Contents of a single board cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, derive_more::IsVariant,
)]
pub enum CellState {
    /// Cell holding neither symbol.
    #[default]
    Blank,
    X,
    O,
}

impl From<Mark> for CellState {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => CellState::X,
            Mark::O => CellState::O,
        }
    }
}

impl CellState {
    /// All cell states, in weight order.
    pub const ALL: [Self; 3] = [CellState::Blank, CellState::X, CellState::O];

    /// Multiplier applied to a cell's magic value when summing a line.
    ///
    /// Blank cells contribute nothing, `X` counts once and `O` counts twice, so
    /// a line sums to 15 only when it is all `X` and to 30 only when it is all `O`.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            CellState::Blank => 0,
            CellState::X => 1,
            CellState::O => 2,
        }
    }

    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            CellState::Blank => None,
            CellState::X => Some(Mark::X),
            CellState::O => Some(Mark::O),
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            CellState::Blank => '.',
            CellState::X => 'X',
            CellState::O => 'O',
        }
    }

    /// Parses a single cell character.
    ///
    /// Accepts `X`/`x`, `O`/`o`, and `.` or `_` for a blank cell.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(CellState::X),
            'O' | 'o' => Some(CellState::O),
            '.' | '_' => Some(CellState::Blank),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for CellState {
    type Err = ParseCellStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(' '), None) => Ok(CellState::Blank),
            (Some(ch), None) => CellState::from_char(ch).ok_or_else(|| ParseCellStateError {
                input: s.to_owned(),
            }),
            _ => Err(ParseCellStateError {
                input: s.to_owned(),
            }),
        }
    }
}
