//! ratcat - play a round of Rat-a-Tat-Cat against bots in the terminal.
//!
//! With `--simulate` every seat is a bot and the round runs without any
//! input, which is handy for checking a seed or a turn limit.

mod console;

use clap::Parser;
use console::{ConsoleDisplay, ConsoleInput};
use ratcat::{NullDisplay, RoundConfig, RoundEngine, ScriptedInput, UniformPolicy};
use tracing::info;

#[derive(Parser)]
#[command(name = "ratcat")]
#[command(about = "Rat-a-Tat-Cat card game")]
struct Args {
    /// Round seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of bot opponents
    #[arg(short, long, default_value = "4")]
    bots: usize,

    /// Your name; skips the name prompt
    #[arg(long)]
    name: Option<String>,

    /// End the round after this many turns
    #[arg(long)]
    max_turns: Option<u32>,

    /// Seat only bots and print the result
    #[arg(long)]
    simulate: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the table.
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut config = RoundConfig::new(seed).with_bots(args.bots);
    if let Some(name) = args.name {
        config = config.with_human_name(name).without_name_prompt();
    }
    if let Some(turns) = args.max_turns {
        config = config.with_max_turns(turns);
    }
    info!(seed, bots = args.bots, "starting round");

    if args.simulate {
        let config = config.bots_only().with_max_turns(args.max_turns.unwrap_or(200));
        let mut engine =
            RoundEngine::new(config, ScriptedInput::empty(), NullDisplay, UniformPolicy)?;
        let result = engine.play_round()?;
        for entry in &result.scores {
            println!("{}\t{}", entry.name, entry.score);
        }
        println!("winners: {}", result.winner_names().join(", "));
        return Ok(());
    }

    let mut engine = RoundEngine::new(config, ConsoleInput::new(), ConsoleDisplay, UniformPolicy)?;
    engine.play_round()?;
    println!("(seed {seed})");
    Ok(())
}
