use std::path::PathBuf;

use chrono::{DateTime, Utc};
use oxitac_engine::{GameSession, GameStats, ResponderSeed};
use rand::Rng as _;
use serde::{Deserialize, Serialize};

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,
    /// Seed for reproducible runs (hex); random when omitted
    #[arg(long)]
    seed: Option<ResponderSeed>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SimulationReport {
    pub generated_at: DateTime<Utc>,
    pub seed: ResponderSeed,
    pub games: usize,
    pub stats: GameStats,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        games,
        seed,
        output,
    } = arg;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Simulating {games} games with seed {seed}...");

    let stats = simulate(*games, seed)?;

    eprintln!();
    eprintln!("Outcome histogram:");
    util::print_histogram(
        [
            ("x-win", stats.x_wins()),
            ("o-win", stats.o_wins()),
            ("tie", stats.ties()),
        ]
        .into_iter(),
    );

    let report = SimulationReport {
        generated_at: Utc::now(),
        seed,
        games: *games,
        stats,
    };
    util::save_json(&report, output.as_deref())?;

    Ok(())
}

/// Plays `games` games where the `X` side picks uniformly random blank cells.
///
/// Both the `X` choices and every session's responder seed come from `seed`,
/// so the same seed always yields the same tallies.
fn simulate(games: usize, seed: ResponderSeed) -> anyhow::Result<GameStats> {
    let mut rng = seed.rng();
    let mut stats = GameStats::new();

    for game in 0..games {
        let mut session = GameSession::with_seed(rng.random());
        while !session.is_game_over() {
            let blanks = session.board().blank_cells();
            let cell = blanks[rng.random_range(0..blanks.len())];
            session.play(cell)?;
        }
        stats.record(session.game_state(), session.marks_placed());
        tracing::trace!(game, state = %session.game_state(), "game finished");
    }

    Ok(stats)
}
