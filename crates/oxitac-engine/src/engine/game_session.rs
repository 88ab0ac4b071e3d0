use rand::Rng as _;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{
    MoveError,
    core::{Board, GameState, Mark, MoveOutcome},
};

use super::seed::ResponderSeed;

/// One accepted move in a session's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct MoveRecord {
    /// Move number within the current game, starting at 0.
    pub turn: usize,
    pub cell: usize,
    pub player: Mark,
    pub response: Option<usize>,
}

/// A single player's game against the auto-responder.
///
/// Owns the board together with a seeded random number generator for the
/// responder, and records every accepted move.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    seed: ResponderSeed,
    rng: Pcg32,
    history: Vec<MoveRecord>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with a random seed.
    ///
    /// For reproducible games, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: ResponderSeed) -> Self {
        Self {
            board: Board::new(),
            seed,
            rng: seed.rng(),
            history: vec![],
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn seed(&self) -> ResponderSeed {
        self.seed
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn game_state(&self) -> GameState {
        self.board.game_state()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    #[must_use]
    pub fn is_disabled(&self, cell: usize) -> bool {
        self.board.is_disabled(cell)
    }

    /// Plays `X` on `cell` and lets the responder answer with `O`.
    pub fn play(&mut self, cell: usize) -> Result<MoveOutcome, MoveError> {
        self.play_as(cell, Mark::X)
    }

    /// Plays `player` on `cell`; the responder still answers with `O`.
    pub fn play_as(&mut self, cell: usize, player: Mark) -> Result<MoveOutcome, MoveError> {
        let outcome = self.board.apply_move(cell, player, &mut self.rng)?;
        self.history.push(MoveRecord {
            turn: self.history.len(),
            cell: outcome.cell,
            player: outcome.player,
            response: outcome.response,
        });
        Ok(outcome)
    }

    /// Starts a new game on a blank board.
    ///
    /// The random stream continues from where the previous game left off, so a
    /// reset session does not replay the same responses.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        tracing::debug!(seed = %self.seed, "session reset");
    }

    /// Number of marks on the board, auto-responses included.
    #[must_use]
    pub fn marks_placed(&self) -> usize {
        Board::CELL_COUNT - self.board.blank_cells().len()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::CellState;

    use super::*;

    #[test]
    fn test_play_records_history() {
        let mut session = GameSession::with_seed(ResponderSeed::from_u128(1));
        let outcome = session.play(4).unwrap();

        assert_eq!(session.history().len(), 1);
        let record = session.history()[0];
        assert_eq!(record.turn, 0);
        assert_eq!(record.cell, 4);
        assert_eq!(record.player, Mark::X);
        assert_eq!(record.response, outcome.response);
        assert_eq!(session.marks_placed(), 2);
    }

    #[test]
    fn test_rejected_move_not_recorded() {
        let mut session = GameSession::with_seed(ResponderSeed::from_u128(1));
        session.play(4).unwrap();
        let board = *session.board();

        assert_eq!(session.play(4), Err(MoveError::CellOccupied { cell: 4 }));
        assert_eq!(session.play(12), Err(MoveError::OutOfRangeCell { cell: 12 }));
        assert_eq!(session.history().len(), 1);
        assert_eq!(*session.board(), board);
    }

    #[test]
    fn test_same_seed_same_game() {
        let seed = ResponderSeed::from_u128(0xdead_beef);
        let mut a = GameSession::with_seed(seed);
        let mut b = GameSession::with_seed(seed);

        for _ in 0..5 {
            let Some(&cell) = a.board().blank_cells().first() else {
                break;
            };
            if a.is_game_over() {
                break;
            }
            assert_eq!(a.play(cell), b.play(cell));
            assert_eq!(a.board(), b.board());
        }
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_full_game_terminates() {
        for n in 0..50 {
            let mut session = GameSession::with_seed(ResponderSeed::from_u128(n));
            while !session.is_game_over() {
                let cell = session.board().blank_cells()[0];
                session.play(cell).unwrap();
            }
            assert!(session.history().len() <= 5);
            assert!(session.game_state().is_finished());
            for cell in 0..Board::CELL_COUNT {
                assert!(session.is_disabled(cell));
            }
        }
    }

    #[test]
    fn test_reset_clears_board_and_history() {
        let mut session = GameSession::with_seed(ResponderSeed::from_u128(9));
        session.play(0).unwrap();
        session.reset();

        assert_eq!(*session.board(), Board::new());
        assert!(session.history().is_empty());
        assert_eq!(session.seed(), ResponderSeed::from_u128(9));
    }

    #[test]
    fn test_play_as_o_still_gets_o_response() {
        let mut session = GameSession::with_seed(ResponderSeed::from_u128(2));
        session.play_as(0, Mark::O).unwrap();
        assert_eq!(session.board().count(CellState::O), 2);
        assert_eq!(session.board().count(CellState::X), 0);
    }
}
