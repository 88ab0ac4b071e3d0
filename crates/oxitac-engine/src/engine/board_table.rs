use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock},
};

use rand::Rng as _;
use rand_pcg::Pcg32;

use crate::{
    MoveError,
    core::{Board, MoveOutcome},
};

use super::{game_session::GameSession, seed::ResponderSeed};

type SessionEntry = Arc<Mutex<GameSession>>;

/// In-memory table of game sessions keyed by player id.
///
/// The table itself is shared behind `&self`; each player's session sits behind
/// its own mutex, so moves for different players never wait on each other while
/// concurrent moves for one player are applied one at a time.
///
/// A session is created on first access. Its responder seed is drawn from the
/// table's own generator, so a table built with [`Self::with_seed`] hands out
/// the same sequence of session seeds every run.
///
/// # Example
///
/// ```
/// use oxitac_engine::{BoardTable, ResponderSeed};
///
/// let table = BoardTable::with_seed(ResponderSeed::from_u128(1));
/// table.play("alice", 4).unwrap();
/// assert!(table.render("alice").is_disabled(4));
/// assert!(!table.render("bob").is_disabled(4));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug)]
pub struct BoardTable {
    seeder: Mutex<Pcg32>,
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl Default for BoardTable {
    fn default() -> Self {
        Self::new()
    }
}

// A panic while holding a lock cannot leave a half-applied move behind, since
// moves are validated before the board changes.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl BoardTable {
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: ResponderSeed) -> Self {
        Self {
            seeder: Mutex::new(seed.rng()),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn entry(&self, player: &str) -> SessionEntry {
        let existing = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(player)
            .cloned();
        if let Some(entry) = existing {
            return entry;
        }

        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entry = sessions.entry(player.to_owned()).or_insert_with(|| {
            let seed: ResponderSeed = lock(&self.seeder).random();
            tracing::debug!(player, %seed, "created session");
            Arc::new(Mutex::new(GameSession::with_seed(seed)))
        });
        Arc::clone(entry)
    }

    /// Runs `f` with exclusive access to `player`'s session.
    pub fn with_session<F, T>(&self, player: &str, f: F) -> T
    where
        F: FnOnce(&mut GameSession) -> T,
    {
        let entry = self.entry(player);
        let mut session = lock(&*entry);
        f(&mut session)
    }

    /// Returns a snapshot of `player`'s board.
    #[must_use]
    pub fn render(&self, player: &str) -> Board {
        self.with_session(player, |session| *session.board())
    }

    /// Plays `X` on `cell` for `player`, followed by the auto-response.
    pub fn play(&self, player: &str, cell: usize) -> Result<MoveOutcome, MoveError> {
        self.with_session(player, |session| session.play(cell))
            .inspect_err(|err| tracing::debug!(player, cell, %err, "move rejected"))
    }

    /// Starts a new game for `player`.
    pub fn reset(&self, player: &str) {
        self.with_session(player, GameSession::reset);
    }

    /// Drops `player`'s session. Returns `false` if there was none.
    pub fn remove(&self, player: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(player)
            .is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Player ids with a session, sorted.
    #[must_use]
    pub fn players(&self) -> Vec<String> {
        let mut players: Vec<_> = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        players.sort_unstable();
        players
    }
}
