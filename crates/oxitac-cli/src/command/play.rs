use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use oxitac_engine::{GameSession, GameState, ResponderSeed};

use crate::record;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the auto-responder (hex); random when omitted
    #[clap(long)]
    seed: Option<ResponderSeed>,
    /// Save the game recording to a file when the session ends
    #[clap(long)]
    save_recording: bool,
    /// Directory to save recording files
    #[clap(long, default_value = "./data/recordings/")]
    record_dir: PathBuf,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        save_recording,
        record_dir,
    } = arg;

    let mut session = seed.map_or_else(GameSession::new, GameSession::with_seed);
    let state = play_game(&mut session, io::stdin().lock(), io::stdout().lock())?;
    tracing::info!(%state, moves = session.history().len(), "game ended");

    if *save_recording {
        let path = record::save(&session, record_dir)?;
        eprintln!("Recording saved to {}", path.display());
    }

    Ok(())
}

/// Runs one interactive game, reading cell numbers from `input`.
///
/// Returns when the game is decided, on `q`, or at end of input.
fn play_game<R, W>(
    session: &mut GameSession,
    mut input: R,
    mut output: W,
) -> anyhow::Result<GameState>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "You are X. Seed: {}", session.seed())?;
    let mut line = String::new();
    loop {
        writeln!(output)?;
        writeln!(output, "{}", session.board())?;

        let state = session.game_state();
        if state.is_finished() {
            writeln!(output, "{}", result_message(state))?;
            return Ok(state);
        }

        write!(output, "Your move (0-8, q to quit): ")?;
        output.flush().context("Failed to flush output")?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            writeln!(output)?;
            return Ok(state);
        }
        let line = line.trim();
        if matches!(line, "q" | "quit") {
            writeln!(output, "{}", result_message(state))?;
            return Ok(state);
        }

        let Ok(cell) = line.parse::<usize>() else {
            writeln!(output, "Not a cell number: {line:?}")?;
            continue;
        };
        match session.play(cell) {
            Ok(outcome) => {
                if let Some(response) = outcome.response {
                    writeln!(output, "O plays {response}")?;
                }
            }
            Err(err) => writeln!(output, "Move rejected: {err}")?,
        }
    }
}

fn result_message(state: GameState) -> &'static str {
    match state {
        GameState::XWin => "You win!",
        GameState::OWin => "O wins.",
        GameState::Tie => "Tie game.",
        GameState::StillPlaying => "Game abandoned.",
    }
}
