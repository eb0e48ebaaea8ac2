extern crate chess_core;
extern crate proptest;

use chess_core::board::perft::perft;
use chess_core::tools::prng::PRNG;
use chess_core::Board;
use proptest::prelude::*;

/// Builds the color-and-rank-flipped mirror of a FEN string: white and black pieces swap,
/// and every rank is reflected top-to-bottom (rank 1 <-> rank 8). The rules of chess are
/// symmetric under this transform, so a position and its mirror must always agree on which
/// moves are legal and how many of them there are.
fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    assert_eq!(fields.len(), 6);

    let ranks: Vec<&str> = fields[0].split('/').collect();
    assert_eq!(ranks.len(), 8);
    let mirrored_ranks: Vec<String> = ranks
        .iter()
        .rev()
        .map(|rank| {
            rank.chars()
                .map(|c| if c.is_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
                .collect::<String>()
        })
        .collect();
    let placement = mirrored_ranks.join("/");

    let turn = if fields[1] == "w" { "b" } else { "w" };

    let castling: String = if fields[2] == "-" {
        "-".to_string()
    } else {
        fields[2]
            .chars()
            .map(|c| match c {
                'K' => 'k',
                'Q' => 'q',
                'k' => 'K',
                'q' => 'Q',
                other => other,
            })
            .collect()
    };

    let ep: String = if fields[3] == "-" {
        "-".to_string()
    } else {
        fields[3]
            .chars()
            .map(|c| match c {
                '3' => '6',
                '6' => '3',
                other => other,
            })
            .collect()
    };

    format!("{} {} {} {} {} {}", placement, turn, castling, ep, fields[4], fields[5])
}

/// Plays `steps` pseudo-random legal moves from the starting position, seeded from `seed`
/// so a failing case is fully reproducible, and returns every position visited along the way
/// (including the starting position).
fn random_walk_positions(seed: u64, steps: usize) -> Vec<Board> {
    let mut prng = PRNG::init(seed | 1);
    let mut board = Board::start_pos();
    let mut positions = vec![board.clone()];
    for _ in 0..steps {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let idx = (prng.rand() as usize) % moves.len();
        board.apply_move(moves[idx]);
        positions.push(board.clone());
    }
    positions
}

proptest! {
    /// P1: every position reached by a legal random walk from the starting position passes
    /// the board's own sanity check (correct king counts, opposing side not left in check).
    #[test]
    fn reachable_positions_are_okay(seed in any::<u64>(), steps in 0usize..40) {
        for board in random_walk_positions(seed, steps) {
            prop_assert!(board.is_okay().is_ok());
        }
    }

    /// P6: `has_legal_moves` agrees with `legal_moves` being non-empty at every reachable
    /// position, including terminal (checkmate/stalemate) ones.
    #[test]
    fn has_legal_moves_agrees_with_legal_moves(seed in any::<u64>(), steps in 0usize..40) {
        for board in random_walk_positions(seed, steps) {
            prop_assert_eq!(board.has_legal_moves(), !board.legal_moves().is_empty());
        }
    }

    /// P5: perft(1) from a reachable position equals perft(1) from its color-and-rank-flipped
    /// mirror, since the rules of chess don't distinguish White from Black.
    #[test]
    fn perft_is_symmetric_under_color_flip(seed in any::<u64>(), steps in 0usize..20) {
        for board in random_walk_positions(seed, steps) {
            let fen = board.to_fen();
            let mirrored = Board::from_fen(&mirror_fen(&fen)).unwrap();
            prop_assert_eq!(perft(&board, 1), perft(&mirrored, 1));
        }
    }
}
