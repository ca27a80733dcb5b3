//! A depth-bounded agent for choosing Connect 4 moves

use crate::bitboard::{BitBoard, Player};
use crate::evaluation::Evaluator;
use crate::rules::Rules;

/// Score magnitude of a decided game; doubles as the win magnitude in the
/// status codes reported by [`GameState::code`]
pub const SCORE_WIN: i32 = 100_000;

/// Status code reserved for a game still in progress
pub const CODE_ONGOING: i32 = -1;

const SCORE_INFINITE: i32 = i32::MAX;

/// Classification of a position
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    /// The boundary encoding of the classification: the reserved sentinel
    /// while the game is ongoing, zero for a tie and a signed win magnitude
    /// naming the winner otherwise
    pub fn code(self) -> i32 {
        match self {
            GameState::Playing => CODE_ONGOING,
            GameState::Draw => 0,
            GameState::PlayerOneWin => SCORE_WIN,
            GameState::PlayerTwoWin => -SCORE_WIN,
        }
    }
}

/// The outcome of one top-level search
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchResult {
    /// The column to play
    pub column: usize,
    /// Score of the position from the mover's perspective
    pub score: i32,
    /// Number of positions visited by the search
    pub nodes: usize,
}

/// An agent that picks moves with a depth-bounded game tree search
///
/// # Notes
/// The agent carries no game state between calls: every entry point
/// rebuilds its board from the move history it is handed, and the effort
/// spent by a search travels back with the chosen move. Separate searches
/// are therefore independent, even across threads.
///
/// # Position Scoring
/// A decided position scores [`SCORE_WIN`] plus the depth remaining when
/// the alignment was found, negated when the side to move is the loser, so
/// forced wins near the root dominate deeper ones. Undecided positions at
/// the depth horizon score by the placement weights of the [`Evaluator`].
pub struct Engine {
    rules: Rules,
    evaluator: Evaluator,
    move_order: Vec<usize>,
}

impl Engine {
    /// Creates an engine for the default board
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Creates an engine for a custom board geometry
    pub fn with_rules(rules: Rules) -> Self {
        Self {
            rules,
            evaluator: Evaluator::new(rules),
            move_order: move_order(rules.columns()),
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Classifies the position reached by a move history
    ///
    /// Pure and idempotent; repeated calls answer identically and leave no
    /// trace on the engine.
    pub fn classify(&self, moves: &[usize]) -> GameState {
        let board = BitBoard::from_slice(self.rules, moves);
        match board.winner() {
            Some(Player::One) => GameState::PlayerOneWin,
            Some(Player::Two) => GameState::PlayerTwoWin,
            None if board.is_full() => GameState::Draw,
            None => GameState::Playing,
        }
    }

    /// Searches a position to a fixed depth and picks the best column
    ///
    /// Columns are tried centre-outward and only a strictly better score
    /// displaces the current best, so the chosen column is reproducible
    /// for a given history and depth. Searching a position that is already
    /// decided or full is a caller error; the returned column is then the
    /// out-of-range sentinel `rules().columns()`.
    pub fn search(&self, moves: &[usize], depth: u32) -> SearchResult {
        let board = BitBoard::from_slice(self.rules, moves);
        debug_assert!(depth >= 1);
        debug_assert!(board.winner().is_none() && !board.is_full());

        // count the root itself
        let mut nodes = 1;
        let mut alpha = -SCORE_INFINITE;
        let mut best_column = self.rules.columns();

        for &column in &self.move_order {
            if !board.playable(column) {
                continue;
            }
            let mut next = board;
            next.play(column);
            // the search window is flipped for the other player
            let score = -self.negamax(next, depth - 1, -SCORE_INFINITE, -alpha, &mut nodes);
            if score > alpha {
                alpha = score;
                best_column = column;
            }
        }

        SearchResult {
            column: best_column,
            score: alpha,
            nodes,
        }
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position from the perspective of the
    /// player about to move; the caller negates the result to fold it
    /// into its own frame.
    fn negamax(
        &self,
        board: BitBoard,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        nodes: &mut usize,
    ) -> i32 {
        *nodes += 1;

        // the previous move may have decided the game
        if board.winner().is_some() {
            return -(SCORE_WIN + depth as i32);
        }
        if board.is_full() {
            return 0;
        }
        if depth == 0 {
            return self.evaluator.evaluate(&board);
        }

        for &column in &self.move_order {
            if !board.playable(column) {
                continue;
            }
            let mut next = board;
            next.play(column);
            // the search window is flipped for the other player
            let score = -self.negamax(next, depth - 1, -beta, -alpha, nodes);
            if score > alpha {
                alpha = score;
            }
            // a perfect opponent will not let the game reach this branch
            if alpha >= beta {
                break;
            }
        }

        alpha
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the columns ordered from the middle outwards, as the middle
/// columns are often better moves; the nearer-left column goes first when
/// two are equally central
fn move_order(columns: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..columns).collect();
    let centre = columns as i32 - 1;
    order.sort_by_key(|&column| (2 * column as i32 - centre).abs());
    order
}
