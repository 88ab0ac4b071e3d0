use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use chrono::Utc;
use oxitac_engine::GameSession;

use crate::schema::record::RecordedSession;

/// Saves a finished or abandoned session to a JSON file.
///
/// The filename is generated from the current timestamp:
/// `manual_{YYYYMMDD_HHMMSS}.json`. The directory is created if needed.
pub fn save(session: &GameSession, record_dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(record_dir)
        .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

    let timestamp = Utc::now();
    let filename = format!("manual_{}.json", timestamp.format("%Y%m%d_%H%M%S"));
    let filepath = record_dir.join(filename);

    let data = RecordedSession {
        recorded_at: timestamp,
        seed: session.seed(),
        final_state: session.game_state(),
        final_board: *session.board(),
        moves: session.history().to_vec(),
    };

    let file = File::create(&filepath)
        .with_context(|| format!("Failed to create file: {}", filepath.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &data)
        .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {}", filepath.display()))?;

    Ok(filepath)
}

/// Reads a recording and checks that replaying its moves reproduces the saved board.
pub fn replay<P>(path: P) -> anyhow::Result<RecordedSession>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let recorded: RecordedSession = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let mut session = GameSession::with_seed(recorded.seed);
    for record in &recorded.moves {
        let outcome = session
            .play_as(record.cell, record.player)
            .with_context(|| format!("move {} in {} is invalid", record.turn, path.display()))?;
        if outcome.response != record.response {
            bail!(
                "{}: move {} replays with response {:?}, recorded {:?}",
                path.display(),
                record.turn,
                outcome.response,
                record.response
            );
        }
    }
    if *session.board() != recorded.final_board {
        bail!("{}: replayed board does not match recording", path.display());
    }
    if session.game_state() != recorded.final_state {
        bail!(
            "{}: replayed game ends {}, recorded {}",
            path.display(),
            session.game_state(),
            recorded.final_state
        );
    }

    Ok(recorded)
}

#[cfg(test)]
mod tests {
    use oxitac_engine::{GameState, ResponderSeed};

    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("oxitac-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_save_and_replay() {
        let dir = temp_dir("save-and-replay");
        let mut session = GameSession::with_seed(ResponderSeed::from_u128(17));
        while !session.is_game_over() {
            let cell = session.board().blank_cells()[0];
            session.play(cell).unwrap();
        }

        let path = save(&session, &dir).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("manual_"));
        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));

        let recorded = replay(&path).unwrap();
        assert_eq!(recorded.seed, session.seed());
        assert_eq!(recorded.final_state, session.game_state());
        assert_eq!(recorded.moves, session.history());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_replay_detects_tampered_board() {
        let dir = temp_dir("tampered");
        let mut session = GameSession::with_seed(ResponderSeed::from_u128(4));
        session.play(0).unwrap();
        let path = save(&session, &dir).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&text).unwrap();
        value["final_board"] = serde_json::Value::from(".........");
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        let err = replay(&path).unwrap_err();
        assert!(err.to_string().contains("does not match"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_replay_detects_tampered_result() {
        let dir = temp_dir("tampered-result");
        let mut session = GameSession::with_seed(ResponderSeed::from_u128(4));
        session.play(0).unwrap();
        assert_eq!(session.game_state(), GameState::StillPlaying);
        let path = save(&session, &dir).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&text).unwrap();
        value["final_state"] = serde_json::Value::from("x-win");
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        let err = replay(&path).unwrap_err();
        assert!(err.to_string().contains("recorded x-win"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
