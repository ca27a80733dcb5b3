//! A minimax agent for playing the board game 'Connect 4'
//!
//! The engine rebuilds its board from the caller's move history on every
//! call, searches to a fixed depth with alpha-beta pruning and returns the
//! chosen column together with the number of positions it visited.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::engine::Engine;
//!
//! let engine = Engine::new();
//! let result = engine.search(&[], 1);
//!
//! assert!((result.column, result.nodes) == (3, 8));
//! ```

use static_assertions::*;
pub use anyhow;

pub mod rules;

pub mod bitboard;

pub mod evaluation;

pub mod engine;

mod test;

/// The default width of the game board in tiles
pub const WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The default number of aligned tiles that wins the game
pub const WIN_LENGTH: usize = 4;

// ensure that the default dimensions fit in a u64 for the bitboard representation
const_assert!(WIDTH * (HEIGHT + 1) < 64);
