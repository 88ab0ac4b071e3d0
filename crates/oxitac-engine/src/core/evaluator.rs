use serde::{Deserialize, Serialize};

use super::{
    CELL_COUNT,
    cell::{CellState, Mark},
    line::{LINES, O_WIN_SUM, X_WIN_SUM, line_sum},
};

/// Classification of a board, derived on demand and never stored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameState {
    #[display("x-win")]
    XWin,
    #[display("o-win")]
    OWin,
    #[display("tie")]
    Tie,
    #[display("still-playing")]
    StillPlaying,
}

impl GameState {
    /// Returns `true` for any state other than [`GameState::StillPlaying`].
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameState::StillPlaying)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            GameState::XWin => Some(Mark::X),
            GameState::OWin => Some(Mark::O),
            GameState::Tie | GameState::StillPlaying => None,
        }
    }
}

/// Classifies a board using weighted magic-square line sums.
///
/// The checks run in a fixed order: any line summing to 15 is an `X` win,
/// then any line summing to 30 is an `O` win, then a remaining blank cell
/// means the game is still on, otherwise it is a tie. A malformed board with
/// complete lines for both symbols therefore reports [`GameState::XWin`].
pub(crate) fn evaluate(cells: &[CellState; CELL_COUNT]) -> GameState {
    let sums = LINES.map(|line| line_sum(cells, line));

    if sums.contains(&X_WIN_SUM) {
        return GameState::XWin;
    }
    if sums.contains(&O_WIN_SUM) {
        return GameState::OWin;
    }
    if cells.iter().any(CellState::is_blank) {
        return GameState::StillPlaying;
    }
    GameState::Tie
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from_index(mut n: usize) -> [CellState; CELL_COUNT] {
        let mut cells = [CellState::Blank; CELL_COUNT];
        for cell in &mut cells {
            *cell = CellState::ALL[n % 3];
            n /= 3;
        }
        cells
    }

    fn has_complete_line(cells: &[CellState; CELL_COUNT], state: CellState) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| cells[i] == state))
    }

    #[test]
    fn test_weighted_sums_agree_with_direct_line_check() {
        // Every one of the 3^9 assignments, reachable or not.
        for n in 0..3_usize.pow(9) {
            let cells = cells_from_index(n);
            let sums = LINES.map(|line| line_sum(&cells, line));
            assert_eq!(
                sums.contains(&X_WIN_SUM),
                has_complete_line(&cells, CellState::X),
                "{cells:?}"
            );
            assert_eq!(
                sums.contains(&O_WIN_SUM),
                has_complete_line(&cells, CellState::O),
                "{cells:?}"
            );
        }
    }

    #[test]
    fn test_evaluate_matches_reference_classification() {
        for n in 0..3_usize.pow(9) {
            let cells = cells_from_index(n);
            let expected = if has_complete_line(&cells, CellState::X) {
                GameState::XWin
            } else if has_complete_line(&cells, CellState::O) {
                GameState::OWin
            } else if cells.contains(&CellState::Blank) {
                GameState::StillPlaying
            } else {
                GameState::Tie
            };
            assert_eq!(evaluate(&cells), expected, "{cells:?}");
        }
    }

    #[test]
    fn test_x_win_takes_precedence_over_o_win() {
        use CellState::{Blank as B, O, X};
        let cells = [X, X, X, O, O, O, B, B, B];
        assert_eq!(evaluate(&cells), GameState::XWin);
    }

    #[test]
    fn test_display_identifiers() {
        assert_eq!(GameState::XWin.to_string(), "x-win");
        assert_eq!(GameState::OWin.to_string(), "o-win");
        assert_eq!(GameState::Tie.to_string(), "tie");
        assert_eq!(GameState::StillPlaying.to_string(), "still-playing");
    }

    #[test]
    fn test_serde_uses_display_identifiers() {
        for state in [
            GameState::XWin,
            GameState::OWin,
            GameState::Tie,
            GameState::StillPlaying,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{state}\""));
        }
    }

    #[test]
    fn test_winner() {
        assert_eq!(GameState::XWin.winner(), Some(Mark::X));
        assert_eq!(GameState::OWin.winner(), Some(Mark::O));
        assert_eq!(GameState::Tie.winner(), None);
        assert!(GameState::Tie.is_finished());
        assert!(!GameState::StillPlaying.is_finished());
    }
}
