use anyhow::Result;

use std::io::{stdin, stdout, Write};
use std::time::Instant;

use connect4_engine::engine::{Engine, GameState, SearchResult, SCORE_WIN};

mod arrayboard;
use arrayboard::*;

fn main() -> Result<()> {
    let engine = Engine::new();
    let mut board = ArrayBoard::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // engine search depth per player, None for human control
    let mut agents: [Option<u32>; 2] = [None, None];
    for player in 0..2 {
        loop {
            let mut buffer = String::new();
            print!("Is player {} engine controlled? y/n: ", player + 1);
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => {
                    agents[player] = Some(ask_depth(player + 1)?);
                    break;
                }
                Some(_letter @ 'n') => break,
                _ => println!("Unknown answer given"),
            }
        }
    }

    // per-move search effort, as (positions, milliseconds)
    let mut stats: Vec<(usize, f64)> = Vec::new();

    // game loop
    loop {
        board.display().expect("Failed to draw board!");

        match engine.classify(board.moves()) {
            GameState::Playing => {
                let mover = board.moves().len() % 2;
                let next_move = if let Some(depth) = agents[mover] {
                    println!("Engine is thinking...");
                    stdout().flush().expect("Failed to flush to stdout!");

                    let start = Instant::now();
                    let result = engine.search(board.moves(), depth);
                    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

                    report_search(mover, depth, &result, elapsed_ms);
                    stats.push((result.nodes, elapsed_ms));

                    result.column + 1
                } else {
                    print!("Move input > ");
                    stdout().flush().expect("Failed to flush to stdout!");
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str);
                            continue;
                        }
                        Ok(column) => column,
                    }
                };

                if let Err(err) = board.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }

    if !stats.is_empty() {
        let total_nodes: usize = stats.iter().map(|(nodes, _)| nodes).sum();
        let total_ms: f64 = stats.iter().map(|(_, ms)| ms).sum();
        println!(
            "\nEngine effort: {} positions in {:.0}ms over {} moves ({:.0} kpos/s)",
            total_nodes,
            total_ms,
            stats.len(),
            rate(total_nodes, total_ms),
        );
        println!(
            "Average per move: {:.0} positions in {:.0}ms",
            total_nodes as f64 / stats.len() as f64,
            total_ms / stats.len() as f64,
        );
    }

    Ok(())
}

/// Prompts for a search depth until a valid one is given
fn ask_depth(player: usize) -> Result<u32> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("Search depth for player {} (1-12): ", player);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.trim().parse::<u32>() {
            Ok(depth @ 1..=12) => return Ok(depth),
            _ => println!("Depth must be a number between 1 and 12"),
        }
    }
}

/// Prints the chosen move, any forced-win prognosis and the search effort
fn report_search(mover: usize, depth: u32, result: &SearchResult, elapsed_ms: f64) {
    // a score beyond the win magnitude carries the remaining depth at the
    // decisive alignment, which converts back to a move count
    if result.score >= SCORE_WIN {
        let plies = depth - (result.score - SCORE_WIN) as u32;
        println!(
            "Player {} can force a win in {} move(s).",
            mover + 1,
            (plies + 1) / 2
        );
    } else if result.score <= -SCORE_WIN {
        let plies = depth - (-result.score - SCORE_WIN) as u32;
        println!(
            "Player {} can force a win in {} move(s).",
            2 - mover,
            plies / 2
        );
    }

    println!("Best move: {}", result.column + 1);
    println!(
        "Searched {} positions in {:.0}ms ({:.0} kpos/s)",
        result.nodes,
        elapsed_ms,
        rate(result.nodes, elapsed_ms),
    );
}

fn rate(nodes: usize, elapsed_ms: f64) -> f64 {
    if elapsed_ms > 0.0 {
        nodes as f64 / elapsed_ms
    } else {
        nodes as f64
    }
}
