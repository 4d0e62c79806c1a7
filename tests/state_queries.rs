//! Board state queries and transitions.

mod common;

use common::board;
use tictactoe_solver::{Board, Cell, Error, GameOutcome, Move, Player};

mod transitions {
    use super::*;

    #[test]
    fn test_apply_move_changes_exactly_one_cell() {
        let before = board("X.. .O. ...");
        let mv = Move::new(2, 1);
        let after = before.apply_move(mv).unwrap();

        let changed: Vec<usize> = (0..9)
            .filter(|&i| before.cell(i) != after.cell(i))
            .collect();
        assert_eq!(changed, vec![mv.index()]);
        assert_eq!(after.get(2, 1), Some(Cell::X));
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let before = Board::new();
        let _ = before.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(before, Board::new());
    }

    #[test]
    fn test_players_alternate() {
        let mut board = Board::new();
        let mut expected = Player::X;
        for index in [4, 0, 8, 2, 1] {
            assert_eq!(board.current_player(), expected);
            board = board.apply_move(Move::from_index(index).unwrap()).unwrap();
            expected = expected.opponent();
        }
    }

    #[test]
    fn test_out_of_range_move_is_rejected() {
        let result = Board::new().apply_move(Move::new(3, 0));
        assert!(matches!(result, Err(Error::InvalidMove { row: 3, col: 0 })));
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let result = board("X.. ... ...").apply_move(Move::new(0, 0));
        assert!(matches!(result, Err(Error::InvalidMove { row: 0, col: 0 })));
    }
}

mod terminal_states {
    use super::*;

    #[test]
    fn test_terminal_iff_winner_or_full() {
        let cases = [
            ("...  ... ...", false),
            ("XXX OO. ...", true),
            ("XOX XOO OXX", true),
            ("XOX OXO OX.", false),
        ];
        for (literal, terminal) in cases {
            let b = board(literal);
            assert_eq!(b.is_terminal(), terminal, "{literal}");
            assert_eq!(
                b.is_terminal(),
                b.winner().is_some() || b.legal_moves().is_empty(),
                "{literal}"
            );
        }
    }

    #[test]
    fn test_utility_values() {
        assert_eq!(board("XXX OO. ...").utility(), 1);
        assert_eq!(board("OOO XX. X..").utility(), -1);
        assert_eq!(board("XOX XOO OXX").utility(), 0);
        assert_eq!(Board::new().utility(), 0);
    }

    #[test]
    fn test_outcome_reporting() {
        assert_eq!(
            board("XXX OO. ...").outcome(),
            Some(GameOutcome::Win(Player::X))
        );
        assert_eq!(board("XOX XOO OXX").outcome(), Some(GameOutcome::Draw));
        assert_eq!(Board::new().outcome(), None);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let b = board("XOX XOO OXX");
        assert!(b.legal_moves().is_empty());
        assert_eq!(b.winner(), None);
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_separators_are_ignored() {
        let plain = board("XO.......");
        assert_eq!(board("XO./.../..."), plain);
        assert_eq!(board("X|O|.\n.|.|.\n.|.|."), plain);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert!(matches!(
            Board::from_string("XO."),
            Err(Error::InvalidBoardLength { got: 3, .. })
        ));
    }

    #[test]
    fn test_unknown_character_is_rejected() {
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(Error::InvalidCellCharacter { character: 'Z', .. })
        ));
    }

    #[test]
    fn test_impossible_counts_are_rejected() {
        assert!(matches!(
            Board::from_string("OO. ... ..."),
            Err(Error::InvalidPieceCounts { x_count: 0, o_count: 2 })
        ));
    }

    #[test]
    fn test_encode_matches_display_rows() {
        let b = board("X.O .X. ..O");
        assert_eq!(b.encode(), "X.O.X...O");
        assert_eq!(b.to_string(), "X.O\n.X.\n..O");
    }
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    fn arb_reachable_board() -> impl Strategy<Value = Board> {
        proptest::collection::vec(0usize..9, 0..9).prop_map(|picks| common::playout(&picks))
    }

    proptest! {
        #[test]
        fn prop_transition_fills_one_empty_cell(board in arb_reachable_board(), pick in 0usize..9) {
            let moves = board.legal_moves();
            prop_assume!(!moves.is_empty());
            let mv = moves[pick % moves.len()];
            let player = board.current_player();
            let child = board.apply_move(mv).unwrap();

            for i in 0..9 {
                if i == mv.index() {
                    prop_assert_eq!(board.cell(i), Cell::Empty);
                    prop_assert_eq!(child.cell(i), player.to_cell());
                } else {
                    prop_assert_eq!(board.cell(i), child.cell(i));
                }
            }
            prop_assert_eq!(child.current_player(), player.opponent());
        }

        #[test]
        fn prop_terminal_and_utility_agree(board in arb_reachable_board()) {
            prop_assert_eq!(
                board.is_terminal(),
                board.winner().is_some() || board.legal_moves().is_empty()
            );
            let expected = match board.winner() {
                Some(Player::X) => 1,
                Some(Player::O) => -1,
                None => 0,
            };
            prop_assert_eq!(board.utility(), expected);
        }

        #[test]
        fn prop_played_boards_stay_valid(board in arb_reachable_board()) {
            prop_assert!(board.validate().is_ok());
            prop_assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
        }
    }
}
