use std::path::PathBuf;

use crate::record;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReplayArg {
    /// Path to a recording saved by `play --save-recording`
    path: PathBuf,
}

pub(crate) fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let recorded = record::replay(&arg.path)?;

    println!("Recorded at {}", recorded.recorded_at);
    println!("Seed:        {}", recorded.seed);
    for m in &recorded.moves {
        match m.response {
            Some(response) => println!(
                "{:>3}: {} -> {}, O -> {}",
                m.turn, m.player, m.cell, response
            ),
            None => println!("{:>3}: {} -> {}", m.turn, m.player, m.cell),
        }
    }
    println!();
    println!("{}", recorded.final_board);
    println!();
    println!("Result:      {}", recorded.final_state);
    Ok(())
}
