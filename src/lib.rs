//! Blockfall: a falling-block puzzle game for the terminal.
//!
//! The crate splits into a pure, deterministic core and thin I/O adapters:
//!
//! - [`core`]: board, pieces, collision, scoring, and the game state machine.
//!   Every transition is a pure function from one snapshot to the next, so
//!   gameplay is fully reproducible from a seed and an action sequence.
//! - [`input`]: maps terminal key events to game actions via configurable
//!   bindings.
//! - [`term`]: framebuffer-based terminal rendering.
//! - [`settings`]: on-disk configuration (board size, speed, skin, controls).

pub mod core;
pub mod input;
pub mod settings;
pub mod term;
pub mod types;
