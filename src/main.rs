//! k-in-a-row engine CLI
//!
//! Plays engine-vs-engine games on the console. Both sides share the same
//! search configuration; X moves first.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tictactoe::{Engine, GameConfig, Mark, SearchConfig};

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Minimax self-play for k-in-a-row tic-tac-toe")]
struct Cli {
    /// Board side length
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Marks in a row needed to win
    #[arg(long, default_value_t = 3)]
    win_length: usize,

    /// Depth limit in plies (0 = full search, otherwise odd)
    #[arg(long, default_value_t = 0)]
    depth: u8,

    /// Enable alpha-beta pruning
    #[arg(long)]
    pruning: bool,

    /// Only consider moves near the last move played
    #[arg(long)]
    locality: bool,

    /// Shuffle candidate moves
    #[arg(long)]
    randomize: bool,

    /// Seed for move shuffling
    #[arg(long)]
    seed: Option<u64>,

    /// Load the search configuration from a JSON file instead of the flags above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rounds to play
    #[arg(long, default_value_t = 1)]
    rounds: u32,
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig> {
        if let Some(path) = &self.config {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let config = serde_json::from_str(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            return Ok(config);
        }
        let mut config = SearchConfig::new(self.depth, self.pruning, self.locality, self.randomize);
        config.seed = self.seed;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let game = GameConfig::new(cli.size, cli.win_length)?;
    let search = cli.search_config()?;

    let mut x = Engine::with_config(game, Mark::X, search.clone())?;
    let mut o = Engine::with_config(game, Mark::O, search)?;
    info!(
        "{}x{} board, {} in a row, {:?}",
        game.size,
        game.size,
        game.win_length,
        x.variant()
    );

    for round in 1..=cli.rounds {
        x.reset();
        o.reset();
        let outcome = play_round(&mut x, &mut o)?;
        println!("{}", x.board());
        match outcome {
            Some(winner) => println!("Round {round}: {winner} wins"),
            None => println!("Round {round}: draw"),
        }
    }
    Ok(())
}

/// Alternate moves until one side wins or the board fills.
fn play_round(x: &mut Engine, o: &mut Engine) -> Result<Option<Mark>> {
    let (mut mover, mut waiter) = (x, o);
    loop {
        if let Some(winner) = mover.winner() {
            return Ok(Some(winner));
        }
        if mover.board().is_full() {
            return Ok(None);
        }
        let result = mover.compute_next_move_with_stats()?;
        info!(
            "{} plays {} ({:?}, score {}, {} nodes, {}ms)",
            mover.side(),
            result.best_move,
            result.search_type,
            result.score,
            result.nodes,
            result.time_ms
        );
        waiter.apply_opponent_move(result.best_move)?;
        std::mem::swap(&mut mover, &mut waiter);
    }
}
