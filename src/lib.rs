//! The core of a bitboard chess engine: position representation, legal move generation,
//! make/unmake, incremental Zobrist hashing, and terminal-state detection (checkmate,
//! stalemate, insufficient material, the 75-move rule, five-fold repetition).
//!
//! This crate deliberately stops at the board. Search, evaluation, opening books,
//! tablebases, and the UCI protocol are all left to a caller built on top of it.
//!
//! # Usage
//!
//! This crate is [on crates.io](https://crates.io/crates/chess_core) and can be
//! used by adding `chess_core` to the dependencies in your project's `Cargo.toml`.
//!
//! # Safety
//!
//! While generally a safe library, this crate was built with a focus on speed. Usage of methods must be
//! followed carefully, as there are many possible ways to `panic` unexpectedly. Methods with the ability
//! to panic will be documented as such.
//!
//! # Examples
//!
//! You can create a [`Board`] with the starting position like so:
//!
//! ```
//! use chess_core::Board;
//! let board = Board::start_pos();
//! ```
//!
//! Generating a list of moves (contained inside a [`MoveList`]) can be done with:
//!
//! ```
//! # use chess_core::Board;
//! let board = Board::start_pos();
//! let list = board.generate_moves();
//! ```
//!
//! Applying and undoing moves is simple:
//!
//! ```
//! use chess_core::Board;
//!
//! let mut board = Board::start_pos();
//! let list = board.generate_moves();
//!
//! for mov in list.iter() {
//!     board.apply_move(*mov);
//!     println!("{}", board.get_fen());
//!     board.undo_move();
//! }
//! ```
//!
//! Using FEN strings is also supported:
//!
//! ```
//! use chess_core::Board;
//!
//! let start_position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let board = Board::from_fen(start_position).unwrap();
//! ```
//!
//! [`MoveList`]: core/move_list/struct.MoveList.html
//! [`Board`]: board/struct.Board.html

#![allow(dead_code)]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
extern crate rand;

pub mod core;
pub mod board;
pub mod config;
pub mod error;
pub mod helper;
pub mod tools;

pub use board::Board;
pub use config::Config;
pub use error::PositionError;
pub use core::piece_move::{BitMove,ScoringMove};
pub use core::move_list::{MoveList,ScoringMoveList};
pub use core::sq::SQ;
pub use core::bitboard::BitBoard;
pub use helper::Helper;
pub use core::{Player, Piece, PieceType, Rank, File};
