use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Outcome tallies over a series of games.
///
/// # Example
///
/// ```
/// use oxitac_engine::{GameState, GameStats};
///
/// let mut stats = GameStats::new();
/// stats.record(GameState::XWin, 5);
/// stats.record(GameState::Tie, 9);
///
/// assert_eq!(stats.games(), 2);
/// assert_eq!(stats.x_wins(), 1);
/// assert_eq!(stats.total_moves(), 14);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameStats {
    x_wins: usize,
    o_wins: usize,
    ties: usize,
    unfinished: usize,
    total_moves: usize,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x_wins: 0,
            o_wins: 0,
            ties: 0,
            unfinished: 0,
            total_moves: 0,
        }
    }

    #[must_use]
    pub const fn x_wins(&self) -> usize {
        self.x_wins
    }

    #[must_use]
    pub const fn o_wins(&self) -> usize {
        self.o_wins
    }

    #[must_use]
    pub const fn ties(&self) -> usize {
        self.ties
    }

    /// Games abandoned while still in progress.
    #[must_use]
    pub const fn unfinished(&self) -> usize {
        self.unfinished
    }

    /// Marks placed across all recorded games, auto-responses included.
    #[must_use]
    pub const fn total_moves(&self) -> usize {
        self.total_moves
    }

    #[must_use]
    pub const fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.ties + self.unfinished
    }

    /// Counts one game ending in `state` after `moves` marks.
    pub const fn record(&mut self, state: GameState, moves: usize) {
        match state {
            GameState::XWin => self.x_wins += 1,
            GameState::OWin => self.o_wins += 1,
            GameState::Tie => self.ties += 1,
            GameState::StillPlaying => self.unfinished += 1,
        }
        self.total_moves += moves;
    }

    /// Adds another set of tallies into this one.
    pub const fn merge(&mut self, other: &GameStats) {
        self.x_wins += other.x_wins;
        self.o_wins += other.o_wins;
        self.ties += other.ties;
        self.unfinished += other.unfinished;
        self.total_moves += other.total_moves;
    }
}
