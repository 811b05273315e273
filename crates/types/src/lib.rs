//! Core types module - shared data structures and constants
//!
//! Plain data shared by the engine, the input mapper and the terminal view.
//! Nothing here depends on I/O or on any other workspace crate.
//!
//! # Reference sizing
//!
//! The grid is a pixel canvas divided by a block size:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CANVAS_WIDTH_PX` | 640 | Reference canvas width |
//! | `CANVAS_HEIGHT_PX` | 480 | Reference canvas height |
//! | `BLOCK_SIZE_PX` | 30 | Pixels per grid cell |
//! | `GRID_WIDTH` | 21 | `640 / 30` |
//! | `GRID_HEIGHT` | 16 | `480 / 30` |
//! | `FRAMES_PER_SECOND` | 60 | Frame-loop target |
//! | `TICKS_PER_DROP` | 30 | Gravity step every half second |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(Command::from_str("rotateCw"), Some(Command::RotateCw));
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (21, 16));
//! ```

/// Reference canvas width in pixels
pub const CANVAS_WIDTH_PX: u32 = 640;

/// Reference canvas height in pixels
pub const CANVAS_HEIGHT_PX: u32 = 480;

/// Pixels per grid cell on the reference canvas
pub const BLOCK_SIZE_PX: u32 = 30;

/// Grid width in cells (21 columns)
pub const GRID_WIDTH: u8 = (CANVAS_WIDTH_PX / BLOCK_SIZE_PX) as u8;

/// Grid height in cells (16 rows)
pub const GRID_HEIGHT: u8 = (CANVAS_HEIGHT_PX / BLOCK_SIZE_PX) as u8;

/// Frame-loop target rate
pub const FRAMES_PER_SECOND: u32 = 60;

/// Ticks between forced downward steps (`FRAMES_PER_SECOND / 2`)
pub const TICKS_PER_DROP: u32 = FRAMES_PER_SECOND / 2;

/// Number of colors in the palette. Matches the catalog size.
pub const PALETTE_SIZE: u8 = 7;

/// A cell on the game board
///
/// - `0`: empty
/// - `1..=PALETTE_SIZE`: occupied, drawn with palette color `value - 1`
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// Index into the color palette (`0..PALETTE_SIZE`)
pub type ColorIndex = u8;

/// Convert a palette index into the value stored on the board.
#[inline]
pub fn cell_for_color(color: ColorIndex) -> Cell {
    color + 1
}

/// Recover the palette index of an occupied cell.
///
/// Returns `None` for empty cells.
#[inline]
pub fn color_of_cell(cell: Cell) -> Option<ColorIndex> {
    cell.checked_sub(1)
}


/// The seven catalog piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    S,
    Z,
    J,
    L,
    O,
    I,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::I,
    ];

    /// Position of this kind in the catalog
    pub fn index(&self) -> usize {
        match self {
            PieceKind::T => 0,
            PieceKind::S => 1,
            PieceKind::Z => 2,
            PieceKind::J => 3,
            PieceKind::L => 4,
            PieceKind::O => 5,
            PieceKind::I => 6,
        }
    }

    /// Lowercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::I => "i",
        }
    }
}

/// Commands delivered by the rendering/input boundary
///
/// The session decides which ones apply in its current state; anything
/// that does not apply is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Zero the gravity counter so the next drop check happens soon.
    /// Does not move the piece by itself.
    SoftDropReset,
    /// Leave the title screen
    Start,
    /// End the game, or exit from the title / game-over screen
    Quit,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateCw,
        Command::SoftDropReset,
        Command::Start,
        Command::Quit,
    ];

    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("quit"), Some(Command::Quit));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" => Some(Command::RotateCw),
            "softdropreset" => Some(Command::SoftDropReset),
            "start" => Some(Command::Start),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::SoftDropReset => "softDropReset",
            Command::Start => "start",
            Command::Quit => "quit",
        }
    }
}

/// Lifecycle of a game session
///
/// `AwaitingStart -> Running -> GameOver`. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    AwaitingStart,
    Running,
    GameOver,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::AwaitingStart => "awaiting_start",
            SessionState::Running => "running",
            SessionState::GameOver => "game_over",
        }
    }
}
