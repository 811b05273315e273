//! Piece controller - the falling piece and its gravity counter
//!
//! The controller never owns the board. Every move is checked against a
//! borrowed `Board` before it is committed, so a rejected move leaves the
//! piece exactly where it was.

use tracing::{debug, trace};

use crate::board::Board;
use crate::rng::{PieceDraw, PieceSource};
use crate::shapes::Shape;
use crate::types::{ColorIndex, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the shape's top-left bounding-box cell
    pub x: i32,
    /// Row of the shape's top-left bounding-box cell
    pub y: i32,
    pub color: ColorIndex,
}

impl ActivePiece {
    /// Place a drawn piece at the spawn position for a board of `board_width`
    ///
    /// Horizontally centered, top row.
    pub fn spawn(draw: PieceDraw, board_width: u8) -> Self {
        Self {
            kind: draw.kind,
            shape: draw.shape,
            x: spawn_x(board_width, &draw.shape),
            y: 0,
            color: draw.color,
        }
    }

    /// Grid coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.cells().map(move |(r, c)| (self.x + c, self.y + r))
    }
}

/// Spawn column: `floor(width / 2) - floor(shape_width / 2)`
pub fn spawn_x(board_width: u8, shape: &Shape) -> i32 {
    board_width as i32 / 2 - shape.width() as i32 / 2
}

/// Tracks the active piece and the ticks since the last forced drop
#[derive(Debug, Clone)]
pub struct PieceController {
    piece: ActivePiece,
    move_delay: u32,
}

impl PieceController {
    pub fn new(piece: ActivePiece) -> Self {
        Self {
            piece,
            move_delay: 0,
        }
    }

    /// Draw the first piece for `board` from `source`
    pub fn spawn_first(board: &Board, source: &mut PieceSource) -> Self {
        Self::new(ActivePiece::spawn(source.draw(), board.width()))
    }

    pub fn piece(&self) -> &ActivePiece {
        &self.piece
    }

    pub fn move_delay(&self) -> u32 {
        self.move_delay
    }

    /// Zero the gravity counter
    pub fn reset_move_delay(&mut self) {
        self.move_delay = 0;
    }

    /// Count one tick toward the next forced drop; returns the new count
    pub fn advance_move_delay(&mut self) -> u32 {
        self.move_delay = self.move_delay.saturating_add(1);
        self.move_delay
    }

    /// Shift the piece by (dx, dy) if the target is free
    pub fn try_move(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        let (nx, ny) = (self.piece.x + dx, self.piece.y + dy);
        if board.is_collision(nx, ny, &self.piece.shape) {
            trace!(dx, dy, x = self.piece.x, y = self.piece.y, "move blocked");
            return false;
        }
        self.piece.x = nx;
        self.piece.y = ny;
        true
    }

    /// Rotate clockwise in place if the rotated shape fits at the current origin
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.piece.shape.rotated();
        if board.is_collision(self.piece.x, self.piece.y, &rotated) {
            trace!(x = self.piece.x, y = self.piece.y, "rotation blocked");
            return false;
        }
        self.piece.shape = rotated;
        true
    }

    /// Merge the piece into the board, clear full rows, and spawn the next
    /// piece. Returns the number of rows cleared.
    ///
    /// Call only after a downward move was rejected.
    pub fn force_lock(&mut self, board: &mut Board, source: &mut PieceSource) -> usize {
        let locked = self.piece;
        board.merge(locked.x, locked.y, &locked.shape, locked.color);
        let cleared = board.clear_completed_rows();

        self.piece = ActivePiece::spawn(source.draw(), board.width());
        self.move_delay = 0;

        debug!(
            locked = locked.kind.as_str(),
            x = locked.x,
            y = locked.y,
            cleared,
            next = self.piece.kind.as_str(),
            "piece locked"
        );
        cleared
    }

    /// Does the current piece overlap the board where it stands?
    ///
    /// Checked right after a spawn; true means the stack reached the top.
    pub fn is_spawn_blocked(&self, board: &Board) -> bool {
        board.is_collision(self.piece.x, self.piece.y, &self.piece.shape)
    }
}
