//! Terminal "game renderer" module.
//!
//! Renders into a simple framebuffer that is flushed to the terminal as a
//! whole frame. Keeps `core` deterministic and testable; the only I/O lives
//! in `renderer`.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{palette_for_skin, GameView, Palette, Viewport};
pub use renderer::TerminalRenderer;
