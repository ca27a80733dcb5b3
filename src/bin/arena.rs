//! Engine-vs-engine depth matrix
//!
//! Plays every ordered pair of search depths up to a limit against each
//! other and reports who won along with the search effort spent. Games are
//! independent of each other, so they run in parallel.

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use std::time::Instant;

use connect4_engine::engine::{Engine, GameState};

const DEFAULT_MAX_DEPTH: u32 = 6;

struct Matchup {
    depths: (u32, u32),
    outcome: GameState,
    moves: usize,
    nodes: usize,
    seconds: f64,
}

/// Plays one game to completion, the first player searching to `depths.0`
/// and the second to `depths.1`
fn play_game(engine: &Engine, depths: (u32, u32)) -> Matchup {
    let mut moves = Vec::new();
    let mut nodes = 0;
    let start = Instant::now();

    let outcome = loop {
        match engine.classify(&moves) {
            GameState::Playing => {
                let depth = if moves.len() % 2 == 0 {
                    depths.0
                } else {
                    depths.1
                };
                let result = engine.search(&moves, depth);
                nodes += result.nodes;
                moves.push(result.column);
            }
            finished => break finished,
        }
    };

    Matchup {
        depths,
        outcome,
        moves: moves.len(),
        nodes,
        seconds: start.elapsed().as_secs_f64(),
    }
}

fn main() -> Result<()> {
    let max_depth = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .map_err(|_| anyhow!("invalid depth limit '{}'", arg))?,
        None => DEFAULT_MAX_DEPTH,
    };
    if max_depth < 1 {
        return Err(anyhow!("depth limit must be at least 1"));
    }

    let engine = Engine::new();
    let pairings: Vec<(u32, u32)> = (1..=max_depth)
        .flat_map(|first| (1..=max_depth).map(move |second| (first, second)))
        .collect();

    let progress = ProgressBar::new(pairings.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing matchups: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let results: Vec<Matchup> = pairings
        .par_iter()
        .map(|&depths| {
            let matchup = play_game(&engine, depths);
            progress.inc(1);
            matchup
        })
        .collect();

    progress.finish();

    let mut total_nodes = 0;
    let mut total_seconds = 0.0;
    for matchup in &results {
        let verdict = match matchup.outcome {
            GameState::PlayerOneWin => "player 1 wins",
            GameState::PlayerTwoWin => "player 2 wins",
            GameState::Draw => "draw",
            GameState::Playing => unreachable!(),
        };
        println!(
            "depth {:2} vs {:2}: {:13} in {:2} moves, {:9} positions, {:.2}s",
            matchup.depths.0,
            matchup.depths.1,
            verdict,
            matchup.moves,
            matchup.nodes,
            matchup.seconds,
        );
        total_nodes += matchup.nodes;
        total_seconds += matchup.seconds;
    }

    println!(
        "\n{} matchups, {} positions searched in {:.2}s of search time",
        results.len(),
        total_nodes,
        total_seconds,
    );

    Ok(())
}
