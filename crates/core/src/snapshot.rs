use crate::board::Board;
use crate::piece::ActivePiece;
use crate::shapes::Shape;
use crate::types::{ColorIndex, PieceKind, SessionState};

/// Read-only view of the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: ColorIndex,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

impl ActiveSnapshot {
    /// Grid coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.cells().map(move |(r, c)| (self.x + c, self.y + r))
    }
}

/// Everything the rendering boundary reads once per frame
///
/// Borrows the board, so it must be dropped before the session is ticked
/// or handed another command.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub board: &'a Board,
    pub active: ActiveSnapshot,
    pub state: SessionState,
    pub score: u32,
    pub lines: u32,
}

impl GameSnapshot<'_> {
    pub fn playable(&self) -> bool {
        self.state == SessionState::Running
    }
}
