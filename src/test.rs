#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::bitboard::BitBoard;
    use crate::engine::{Engine, GameState, SCORE_WIN};
    use crate::evaluation::Evaluator;
    use crate::rules::Rules;

    /// A full 42-move history whose final board holds no alignment.
    ///
    /// Columns are filled in pairs, one column starting with a first-player
    /// tile interleaved with one starting with a second-player tile, which
    /// leaves every row an alternating pattern of two-tile runs.
    fn tie_history() -> Vec<usize> {
        fn pair_block(x: usize, y: usize) -> [usize; 12] {
            [x, y, y, x, x, y, y, x, x, y, y, x]
        }
        let mut moves = Vec::new();
        moves.extend(&pair_block(0, 2));
        moves.extend(&pair_block(1, 3));
        moves.extend(&pair_block(4, 6));
        // the remaining column alternates on its own
        moves.extend(&[5; 6]);
        moves
    }

    #[test]
    fn empty_history_is_ongoing() {
        let engine = Engine::new();
        assert_eq!(engine.classify(&[]), GameState::Playing);
        assert_eq!(engine.classify(&[]).code(), -1);
    }

    #[test]
    fn horizontal_win() {
        let engine = Engine::new();
        let state = engine.classify(&[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(state, GameState::PlayerOneWin);
        assert_eq!(state.code(), SCORE_WIN);
    }

    #[test]
    fn vertical_win() {
        let engine = Engine::new();
        assert_eq!(
            engine.classify(&[0, 1, 0, 1, 0, 1, 0]),
            GameState::PlayerOneWin
        );
    }

    #[test]
    fn rising_diagonal_win() {
        let engine = Engine::new();
        // first player lands on (0,0), (1,1), (2,2) and finally (3,3)
        assert_eq!(
            engine.classify(&[0, 1, 1, 2, 2, 3, 2, 3, 3, 0, 3]),
            GameState::PlayerOneWin
        );
    }

    #[test]
    fn falling_diagonal_win() {
        let engine = Engine::new();
        // the mirror image of the rising diagonal game
        assert_eq!(
            engine.classify(&[6, 5, 5, 4, 4, 3, 4, 3, 3, 6, 3]),
            GameState::PlayerOneWin
        );
    }

    #[test]
    fn second_player_win_has_distinct_code() {
        let engine = Engine::new();
        let state = engine.classify(&[0, 1, 0, 1, 0, 1, 2, 1]);
        assert_eq!(state, GameState::PlayerTwoWin);
        assert_eq!(state.code(), -SCORE_WIN);
    }

    #[test]
    fn full_board_without_alignment_is_a_draw() {
        let engine = Engine::new();
        let moves = tie_history();
        assert_eq!(moves.len(), 42);
        let state = engine.classify(&moves);
        assert_eq!(state, GameState::Draw);
        assert_eq!(state.code(), 0);
    }

    #[test]
    fn empty_board_search_opens_in_the_centre() {
        let engine = Engine::new();
        let result = engine.search(&[], 1);
        assert_eq!(result.column, 3);
        // the root and its seven children
        assert_eq!(result.nodes, 8);
    }

    #[test]
    fn search_takes_an_immediate_win() {
        let engine = Engine::new();
        // three first-player tiles stacked in column 0
        let result = engine.search(&[0, 1, 0, 1, 0, 1], 3);
        assert_eq!(result.column, 0);
        assert!(result.score >= SCORE_WIN);
    }

    #[test]
    fn search_blocks_an_immediate_loss() {
        let engine = Engine::new();
        // the second player must answer the three-tile stack in column 0
        let result = engine.search(&[0, 1, 0, 1, 0], 4);
        assert_eq!(result.column, 0);
    }

    #[test]
    fn search_never_picks_a_full_column() {
        let engine = Engine::new();
        let moves = [3, 3, 3, 3, 3, 3];
        for depth in 1..=5 {
            let result = engine.search(&moves, depth);
            assert_ne!(result.column, 3);
            assert!(result.column < 7);
        }
    }

    #[test]
    fn node_counts_grow_with_depth() {
        let engine = Engine::new();

        let mut previous = 0;
        for depth in 1..=6 {
            let nodes = engine.search(&[], depth).nodes;
            assert!(nodes >= previous);
            previous = nodes;

            // never more than the full tree of that depth
            let mut bound: usize = 1;
            let mut layer: usize = 1;
            for _ in 0..depth {
                layer *= 7;
                bound += layer;
            }
            assert!(nodes <= bound);
        }
    }

    #[test]
    fn depth_one_visits_each_legal_column_once() {
        let engine = Engine::new();
        // column 3 is full, leaving six legal replies
        let result = engine.search(&[3, 3, 3, 3, 3, 3], 1);
        assert_eq!(result.nodes, 7);
    }

    #[test]
    fn classification_is_pure_and_search_deterministic() {
        let engine = Engine::new();
        let moves = [3, 3, 2, 4, 1];

        let first = engine.search(&moves, 5);
        for _ in 0..3 {
            assert_eq!(engine.classify(&moves), GameState::Playing);
        }
        let second = engine.search(&moves, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn reconstruction_round_trips() {
        let rules = Rules::default();
        let moves = [3, 3, 2, 4, 1, 0, 6, 5, 2];

        let replayed = BitBoard::from_slice(rules, &moves);
        let mut incremental = BitBoard::new(rules);
        for &column in &moves {
            incremental.play(column);
        }

        assert_eq!(replayed, incremental);
        assert_eq!(replayed, BitBoard::from_slice(rules, &moves));
        assert_eq!(replayed.num_moves(), moves.len());
    }

    #[test]
    fn placement_weights_match_the_window_counts() {
        let evaluator = Evaluator::new(Rules::default());

        // corners and centre of the canonical 7x6 table
        assert_eq!(evaluator.weight(0, 0), 3);
        assert_eq!(evaluator.weight(6, 5), 3);
        assert_eq!(evaluator.weight(1, 1), 6);
        assert_eq!(evaluator.weight(2, 2), 11);
        assert_eq!(evaluator.weight(3, 0), 7);
        assert_eq!(evaluator.weight(3, 1), 10);
        assert_eq!(evaluator.weight(3, 2), 13);
    }

    #[test]
    fn evaluation_is_scored_for_the_side_to_move() {
        let rules = Rules::default();
        let evaluator = Evaluator::new(rules);

        assert_eq!(evaluator.evaluate(&BitBoard::new(rules)), 0);
        // one centre tile, seen from the opponent's side
        assert_eq!(evaluator.evaluate(&BitBoard::from_slice(rules, &[3])), -7);
        // centre against a flank tile, seen from the first player again
        assert_eq!(evaluator.evaluate(&BitBoard::from_slice(rules, &[3, 2])), 2);
    }

    #[test]
    fn oversized_boards_are_rejected() {
        assert!(Rules::new(9, 7, 4).is_err());
        assert!(Rules::new(0, 6, 4).is_err());
        assert!(Rules::new(3, 3, 4).is_err());
        assert!(Rules::new(8, 7, 4).is_ok());
    }

    #[test]
    fn smaller_boards_play_by_their_own_rules() -> Result<()> {
        let engine = Engine::with_rules(Rules::new(4, 4, 3)?);

        // three stacked tiles already win here
        assert_eq!(
            engine.classify(&[0, 1, 0, 1, 0]),
            GameState::PlayerOneWin
        );
        assert_eq!(engine.classify(&[0, 1, 0, 1]), GameState::Playing);

        let result = engine.search(&[0, 1, 0, 1], 2);
        assert_eq!(result.column, 0);
        assert!(result.score >= SCORE_WIN);
        Ok(())
    }
}
