//! Core module: the deterministic state-transition engine.
//!
//! Pure game rules with zero dependencies on UI, timers, or I/O. Every
//! transition is a total function from one snapshot to the next; randomness
//! comes from a seeded generator carried inside the snapshot.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use board::Board;
pub use collision::{drop_distance, ghost_piece, has_collision};
pub use game_state::GameState;
pub use pieces::{shape_offsets, Piece, PieceShape, TileOffset};
pub use rng::{PieceGen, SimpleRng};
