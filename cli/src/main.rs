use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use desmina_core::{
    BoardConfig, BoardEngine, CellCount, Coord, Coord2, GameOutcome, MinefieldGenerator,
    RandomMinefieldGenerator, RevealOutcome,
};

use crate::render::BoardDisplay;

mod render;

/// Terminal mine-discovery puzzle.
#[derive(Debug, Parser)]
#[command(name = "desmina", version, about)]
struct Cli {
    /// Side length of the square board
    #[arg(long, default_value_t = 10)]
    size: Coord,

    /// Number of mines to place
    #[arg(long, default_value_t = 10)]
    mines: CellCount,

    /// Seed for mine placement; drawn from the system clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let config = BoardConfig::new(cli.size, cli.mines)
        .context("board size must be positive, with fewer mines than cells")?;
    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::info!(
        "starting a {0}x{0} game with {1} mines (seed {2})",
        config.size(),
        config.mines(),
        seed
    );

    let minefield = RandomMinefieldGenerator::new(seed).generate(&config);
    let mut engine = BoardEngine::new(minefield);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while engine.outcome() == GameOutcome::InProgress {
        println!("{}", BoardDisplay::new(&engine));
        print!("Where do you want to dig? Input as row, col: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // stdin closed mid-game
            return Ok(());
        };
        let line = line.context("failed to read input")?;

        let Some(coords) = parse_coords(&line) else {
            println!("Invalid location");
            continue;
        };

        match engine.reveal(coords) {
            Ok(RevealOutcome::Revealed) => {}
            Ok(RevealOutcome::HitMine) => break,
            Err(_) => println!("Invalid location"),
        }
    }

    match engine.outcome() {
        GameOutcome::Won => {
            println!("{}", BoardDisplay::new(&engine));
            println!("You win!");
        }
        GameOutcome::Lost => {
            engine.reveal_all();
            println!("{}", BoardDisplay::new(&engine));
            println!("Game over");
        }
        GameOutcome::InProgress => {}
    }

    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

/// Parses a `"row, col"` pair; whitespace around either number is accepted.
fn parse_coords(line: &str) -> Option<Coord2> {
    let (row, col) = line.split_once(',')?;
    let row = row.trim().parse().ok()?;
    let col = col.trim().parse().ok()?;
    Some((row, col))
}
