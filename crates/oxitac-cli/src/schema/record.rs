use chrono::{DateTime, Utc};
use oxitac_engine::{Board, GameState, MoveRecord, ResponderSeed};
use serde::{Deserialize, Serialize};

/// Recorded play session, enough to replay the game from its seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedSession {
    /// Timestamp when recording was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Seed used by the auto-responder
    pub seed: ResponderSeed,
    /// State of the game when the session ended
    pub final_state: GameState,
    /// Board when the session ended
    pub final_board: Board,
    /// Accepted moves in order
    pub moves: Vec<MoveRecord>,
}
