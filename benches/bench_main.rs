#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;

extern crate chess_core;

mod board_benches;
mod lookup_benches;
mod magic_benches;
mod move_gen_benches;
mod piece_loc_benches;

criterion_main! {
    bit_benches::bit_benches,
    board_benches::board_benches,
    magic_benches::magic_benches,
    piece_loc_benches::piece_loc_benches,
    perft_benches::perft_benches,
    lookup_benches::lookup_benches,
    move_gen_benches::movegen_benches,
}
