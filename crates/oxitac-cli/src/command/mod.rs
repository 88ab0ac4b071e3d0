use clap::{Parser, Subcommand};

use self::{evaluate::EvaluateArg, play::PlayArg, replay::ReplayArg, simulate::SimulateArg};

mod evaluate;
mod play;
mod replay;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play against the random auto-responder
    Play(#[clap(flatten)] PlayArg),
    /// Play many random games and report the outcomes
    Simulate(#[clap(flatten)] SimulateArg),
    /// Classify a board given as text
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Verify and print a saved game recording
    Replay(#[clap(flatten)] ReplayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
        Mode::Evaluate(arg) => evaluate::run(&arg),
        Mode::Replay(arg) => replay::run(&arg)?,
    }
    Ok(())
}
