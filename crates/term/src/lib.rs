//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It avoids widget toolkits and
//! instead draws into a character canvas that is diffed and flushed to the
//! terminal once per frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure so views can be asserted on in tests
//! - Control aspect ratio directly (2 columns per grid cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Canvas, Glyph, Rgb, Style};
pub use game_view::{palette_rgb, GameView, Viewport, PALETTE};
pub use renderer::{encode_frame, TerminalRenderer};
