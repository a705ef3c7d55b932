//! CLI frontend for a rock-paper-scissors series against the computer.

mod commands;
mod logging;

use std::process;

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(
    name = "rps",
    about = "Rock, paper, scissors against the computer, best of an odd number of rounds",
    version
)]
struct Cli {
    /// Seed the system's moves for a reproducible series
    #[arg(long)]
    seed: Option<u64>,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let result = logging::init(cli.verbose).and_then(|()| commands::play::run(cli.seed));

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
