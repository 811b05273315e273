//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the falling-block simulation: the grid, the piece
//! catalog, the falling piece, scoring and the session state machine.
//! It has no dependencies on the terminal, input handling, or any I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: any frame loop can drive it
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision detection, merge and row clearing
//! - [`shapes`]: the seven piece templates and clockwise matrix rotation
//! - [`rng`]: uniform, independent shape and color draws
//! - [`piece`]: the falling piece and its gravity counter
//! - [`scoring`]: cascading line-clear points
//! - [`session`]: session lifecycle, command dispatch and gravity ticks
//! - [`config`]: grid size and drop timing
//! - [`snapshot`]: read-only views for the renderer
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Flow, GameConfig, GameSession};
//! use blockfall_types::{Command, SessionState};
//!
//! let mut game = GameSession::new(GameConfig::default(), 12345);
//! assert_eq!(game.state(), SessionState::AwaitingStart);
//!
//! game.handle_command(Command::Start);
//! game.handle_command(Command::MoveRight);
//! game.handle_command(Command::RotateCw);
//!
//! // One call per frame; gravity moves the piece every `ticks_per_drop` calls.
//! for _ in 0..game.config().ticks_per_drop {
//!     game.tick();
//! }
//! assert_eq!(game.active_piece().y, 1);
//!
//! game.handle_command(Command::Quit);
//! assert_eq!(game.state(), SessionState::GameOver);
//! assert_eq!(game.handle_command(Command::Quit), Flow::Exit);
//! ```
//!
//! # Timing
//!
//! There is no wall clock in the engine. The frame loop calls
//! [`GameSession::tick`](session::GameSession::tick) once per frame; with the
//! reference 60 frames per second and 30 ticks per drop the piece falls one row
//! every half second.

pub mod board;
pub mod config;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use piece::{ActivePiece, PieceController};
pub use rng::{PieceDraw, PieceSource};
pub use scoring::line_clear_points;
pub use session::{Flow, GameSession, LockEvent};
pub use shapes::{all_shapes, random_color, random_shape, rotate, shape_of, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
