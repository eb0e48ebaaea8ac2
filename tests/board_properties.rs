extern crate chess_core;

use chess_core::board::GameResult;
use chess_core::Board;

/// Scholar's mate ends the game with Black checkmated.
#[test]
fn scholars_mate_is_checkmate() {
    let mut board = Board::start_pos();
    for mov in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
        board.make(mov).unwrap();
    }
    assert!(board.has_ended());
    assert!(board.in_check());
    assert_eq!(board.winner(), GameResult::Winner(chess_core::Player::White));
}

/// The classic king + pawn endgame stalemate has no legal moves but isn't check.
#[test]
fn stalemate_is_a_draw() {
    let board = Board::from_fen("8/8/8/8/8/4k3/4p3/4K3 w - - 0 1").unwrap();
    assert!(board.legal_moves().is_empty());
    assert!(!board.in_check());
    assert!(board.has_ended());
    assert_eq!(board.winner(), GameResult::Draw);
}

/// A lone king and bishop cannot deliver mate (FIDE 9.7 insufficient material).
#[test]
fn insufficient_material_is_a_draw() {
    let board = Board::from_fen("k7/8/8/8/8/8/8/K6B w - - 0 1").unwrap();
    assert!(board.has_ended());
    assert!(board.insufficient_material());
    assert_eq!(board.winner(), GameResult::Draw);
}

/// Applying and reverting every legal move from a position leaves its hash and FEN
/// unchanged.
#[test]
fn make_unmake_preserves_hash_and_fen() {
    let mut board = Board::start_pos();
    let before_hash = board.hash();
    let before_fen = board.to_fen();
    let moves = board.legal_moves();
    for mov in &moves {
        board.make(mov).unwrap();
        board.unmake();
        assert_eq!(board.hash(), before_hash);
        assert_eq!(board.to_fen(), before_fen);
    }
}

/// Castling rights are cleared precisely for the side that castles, and the other
/// side's rights are untouched.
#[test]
fn castling_clears_only_the_castled_sides_rights() {
    let mut board = Board::start_pos();
    for mov in ["e2e4", "e7e5", "g1f3", "g8f6", "f1c4", "f8c5", "e1g1"] {
        board.make(mov).unwrap();
    }
    let fen = board.to_fen();
    let rights = fen.split_whitespace().nth(2).unwrap();
    assert!(!rights.contains('K'));
    assert!(!rights.contains('Q'));
    assert!(rights.contains('k'));
    assert!(rights.contains('q'));
}

/// A pawn can't capture en passant onto a square it wasn't permitted to, and the
/// legal en-passant capture is reachable once the triggering double push has happened.
#[test]
fn en_passant_only_legal_against_the_triggering_pawn() {
    let board =
        Board::from_fen("rnbqkbnr/1ppppppp/8/p7/8/8/PPPPPPPP/RNBQKBNR w KQkq a6 0 2").unwrap();
    assert!(!board.is_legal("b2a3"));
    assert!(board.is_legal("b2b3"));
    assert!(board.is_legal("b2b4"));

    let mut board = Board::start_pos();
    for mov in ["e2e4", "a7a5", "e4e5", "a5a4", "b2b4"] {
        board.make(mov).unwrap();
    }
    assert!(board.is_legal("a4b3"));
    let before = board.to_fen();
    board.make("a4b3").unwrap();
    board.unmake();
    assert_eq!(board.to_fen(), before);
}

/// Three-fold repetition is claimable well before the unconditional five-fold rule fires.
#[test]
fn threefold_repetition_precedes_fivefold() {
    let mut board = Board::start_pos();
    assert!(!board.three_fold_repetition());
    for _ in 0..2 {
        board.make("g1f3").unwrap();
        board.make("g8f6").unwrap();
        board.make("f3g1").unwrap();
        board.make("f6g8").unwrap();
    }
    assert!(board.three_fold_repetition());
    assert!(!board.five_fold_repetition());
    assert!(!board.has_ended());
}
