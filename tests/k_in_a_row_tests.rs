//! Search agents playing k-in-a-row boards.

use rust_gametree::games::k_in_a_row::{Board, KInARow, Mark, Square};
use rust_gametree::search::{
    Agent, AlphaBeta, Minimax, ReflexAgent, SearchAgent, SearchConfig, StrategyKind,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn ttt(perspective: Mark, moves: &[Square]) -> Board {
    Board::replay(KInARow::tic_tac_toe(), perspective, moves).unwrap()
}

// =============================================================================
// Tactics
// =============================================================================

#[test]
fn test_takes_immediate_win() {
    let board = ttt(Mark::X, &[sq(1, 1), sq(2, 1), sq(1, 2), sq(2, 2)]);

    for kind in StrategyKind::ALL {
        let mut agent = SearchAgent::from_kind(kind, SearchConfig::default());
        assert_eq!(agent.get_action(&board), Ok(Some(sq(1, 3))), "{kind}");
    }

    let mut reflex = ReflexAgent::new(SearchConfig::default(), 42);
    assert_eq!(reflex.get_action(&board), Ok(Some(sq(1, 3))));
}

#[test]
fn test_blocks_immediate_loss() {
    // X threatens 1,3; O to move.
    let board = ttt(Mark::O, &[sq(1, 1), sq(2, 2), sq(1, 2)]);

    let mut minimax = SearchAgent::new(Minimax, SearchConfig::default());
    assert_eq!(minimax.get_action(&board), Ok(Some(sq(1, 3))));

    let mut alphabeta = SearchAgent::new(AlphaBeta, SearchConfig::default());
    assert_eq!(alphabeta.get_action(&board), Ok(Some(sq(1, 3))));
    assert!(alphabeta.stats().nodes_visited <= minimax.stats().nodes_visited);
}

#[test]
fn test_finished_board_has_no_action() {
    let board = ttt(Mark::X, &[sq(1, 1), sq(2, 1), sq(1, 2), sq(2, 2), sq(1, 3)]);
    let mut agent = SearchAgent::new(AlphaBeta, SearchConfig::default());
    assert_eq!(agent.get_action(&board), Ok(None));
}

// =============================================================================
// Full Games
// =============================================================================

fn self_play(kind: StrategyKind) -> Board {
    let mut agent = SearchAgent::from_kind(kind, SearchConfig::default().with_depth(9));
    let mut board = KInARow::tic_tac_toe().start(Mark::X);

    while !board.is_game_over() {
        let to_move = board.to_move();
        let square = agent
            .get_action(&board.from_perspective(to_move))
            .unwrap()
            .expect("open squares remain");
        board = board.play(square).unwrap();
    }
    board
}

#[test]
fn test_perfect_play_is_a_draw() {
    for kind in [StrategyKind::Minimax, StrategyKind::AlphaBeta] {
        let board = self_play(kind);
        assert_eq!(board.winner(), None, "{kind}");
        assert_eq!(board.utility(), 0);
        assert_eq!(board.moves_made(), 9);
    }
}

#[test]
fn test_minimax_and_alphabeta_agree_midgame() {
    let board = ttt(Mark::X, &[sq(2, 2), sq(1, 1), sq(3, 3)]);
    let board = board.from_perspective(Mark::O);

    let mut minimax = SearchAgent::new(Minimax, SearchConfig::default().with_depth(3));
    let mut alphabeta = SearchAgent::new(AlphaBeta, SearchConfig::default().with_depth(3));
    let expected = minimax.search(&board).unwrap();
    let actual = alphabeta.search(&board).unwrap();

    assert_eq!(expected.value, actual.value);
    assert!(alphabeta.stats().cutoffs > 0);
}

#[test]
fn test_connect_four_smoke() {
    let board = KInARow::connect_four().start(Mark::X);
    for kind in StrategyKind::ALL {
        let mut agent = SearchAgent::from_kind(kind, SearchConfig::default());
        let square = agent.get_action(&board).unwrap().unwrap();
        assert_eq!(square.row, 6, "{kind} must play the bottom row");
    }
}

#[test]
fn test_expectimax_optimistic_against_random_opponent() {
    let board = ttt(Mark::O, &[sq(1, 1), sq(2, 2), sq(1, 2)]);
    let mut minimax = SearchAgent::from_kind(StrategyKind::Minimax, SearchConfig::default());
    let mut expectimax = SearchAgent::from_kind(StrategyKind::Expectimax, SearchConfig::default());

    let lower = minimax.search(&board).unwrap().value;
    let upper = expectimax.search(&board).unwrap().value;
    assert!(upper >= lower);
}
