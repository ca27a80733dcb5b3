//! Static evaluation of undecided positions

use crate::bitboard::{BitBoard, Player};
use crate::rules::Rules;

/// Placement-weight evaluator
///
/// Each cell is weighted by the number of win-length windows that pass
/// through it, which makes central cells worth the most. A board scores
/// the weight sum of the mover's tiles minus the opponent's, from the
/// perspective of the player about to move.
pub struct Evaluator {
    rules: Rules,
    // weight per bit index of the board layout
    weights: Vec<i32>,
}

impl Evaluator {
    pub fn new(rules: Rules) -> Self {
        let mut weights = vec![0; rules.columns() * rules.stride()];
        let run = rules.win_length() as isize;

        // walk every window start in every direction and credit its cells
        for &(dc, dr) in &[(1isize, 0isize), (0, 1), (1, 1), (1, -1)] {
            for column in 0..rules.columns() {
                for row in 0..rules.rows() {
                    let end_column = column as isize + (run - 1) * dc;
                    let end_row = row as isize + (run - 1) * dr;
                    if end_column >= rules.columns() as isize
                        || end_row < 0
                        || end_row >= rules.rows() as isize
                    {
                        continue;
                    }
                    for i in 0..run {
                        let c = (column as isize + i * dc) as usize;
                        let r = (row as isize + i * dr) as usize;
                        weights[rules.bit(c, r)] += 1;
                    }
                }
            }
        }

        Self { rules, weights }
    }

    /// The number of win-length windows through a cell
    pub fn weight(&self, column: usize, row: usize) -> i32 {
        self.weights[self.rules.bit(column, row)]
    }

    /// Scores an undecided board for the player about to move
    pub fn evaluate(&self, board: &BitBoard) -> i32 {
        let score =
            self.mask_score(board.mask(Player::One)) - self.mask_score(board.mask(Player::Two));
        match board.side_to_move() {
            Player::One => score,
            Player::Two => -score,
        }
    }

    fn mask_score(&self, mut mask: u64) -> i32 {
        let mut score = 0;
        while mask != 0 {
            score += self.weights[mask.trailing_zeros() as usize];
            mask &= mask - 1;
        }
        score
    }
}
