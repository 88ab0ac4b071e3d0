//! Game sessions built on top of the board engine.
//!
//! - [`GameSession`] - one player's game with a seeded auto-responder and move history
//! - [`ResponderSeed`] - seed for deterministic auto-responses
//! - [`GameStats`] - outcome tallies over many games
//! - [`BoardTable`] - sessions keyed by player id, safe to share between threads
//!
//! # Example
//!
//! ```
//! use oxitac_engine::{GameSession, GameState};
//!
//! let mut session = GameSession::new();
//!
//! while !session.is_game_over() {
//!     let cell = session.board().blank_cells()[0];
//!     session.play(cell).unwrap();
//! }
//!
//! assert_ne!(session.game_state(), GameState::StillPlaying);
//! ```

pub use self::{board_table::*, game_session::*, game_stats::*, seed::*};

mod board_table;
mod game_session;
mod game_stats;
mod seed;
