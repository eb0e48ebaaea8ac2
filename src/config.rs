//! Allocation policy for the repetition-history cache kept alongside a [`Board`](../board/struct.Board.html).
//!
//! The undo chain itself (`BoardState::prev`) is a reference-counted linked list and needs no
//! preallocation, but walking it to answer "has this position occurred before" is O(depth) per
//! query. `Board` mirrors the Zobrist key of every played ply into a flat `Vec<u64>` so
//! repetition checks are a cheap linear scan over a contiguous buffer instead of a pointer chase.
//! `Config` controls how that buffer grows.

/// Controls the preallocation and growth of a [`Board`]'s repetition-history cache.
///
/// [`Board`]: ../board/struct.Board.html
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Capacity the repetition-history cache starts with. Matching this to the expected game
    /// length avoids reallocating during a typical game.
    pub initial_undo_capacity: usize,
    /// Multiplier applied to the cache's capacity each time it fills up.
    pub growth_factor: usize,
    /// Hard ceiling on the cache's capacity. Growing past this returns
    /// [`PositionError::CapacityExceeded`](../error/enum.PositionError.html#variant.CapacityExceeded).
    pub max_undo_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_undo_capacity: 64,
            growth_factor: 2,
            max_undo_capacity: 1 << 20,
        }
    }
}
