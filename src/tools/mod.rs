//! Small internal utilities shared by the board representation: the reference-counted
//! undo chain and the xorshift generator used for random-position sampling.

pub mod undo_arc;
pub mod prng;
