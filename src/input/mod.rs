//! Input adapter: translates terminal key events into core transitions.
//!
//! Each key event maps to at most one [`crate::types::GameAction`]; keys
//! without a binding fall through as no-ops.

pub mod map;

pub use map::{action_for_key, should_quit};
