//! Game session - ties together board, piece controller, piece source and score
//!
//! The session is the only thing the frame loop talks to. It is an owned
//! value; nothing here is global. Commands and ticks mutate it, snapshots
//! read it, and the borrow checker keeps the two from overlapping.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::PieceController;
use crate::rng::PieceSource;
use crate::scoring::line_clear_points;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, SessionState};

/// What the frame loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Emitted by `tick` when the falling piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: usize,
    pub points: u32,
    /// The replacement piece spawned into occupied cells
    pub game_over: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    controller: PieceController,
    source: PieceSource,
    state: SessionState,
    score: u32,
    lines: u32,
}

impl GameSession {
    /// Create a session with a deterministic piece sequence
    ///
    /// Panics if `config` does not validate.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_source(config, PieceSource::new(seed))
    }

    /// Create a session seeded from the operating system
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::with_source(config, PieceSource::from_entropy())
    }

    fn with_source(config: GameConfig, mut source: PieceSource) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid session config: {err}");
        }
        let board = Board::new(config.width, config.height);
        let controller = PieceController::spawn_first(&board, &mut source);

        Self {
            config,
            board,
            controller,
            source,
            state: SessionState::AwaitingStart,
            score: 0,
            lines: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Seed of the piece sequence, if the session was seeded explicitly
    pub fn seed(&self) -> Option<u64> {
        self.source.seed()
    }

    /// Read-only board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only copy of the falling piece
    pub fn active_piece(&self) -> ActiveSnapshot {
        ActiveSnapshot::from(*self.controller.piece())
    }

    pub fn move_delay(&self) -> u32 {
        self.controller.move_delay()
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            board: &self.board,
            active: self.active_piece(),
            state: self.state,
            score: self.score,
            lines: self.lines,
        }
    }

    /// Leave the title screen. No effect in any other state.
    pub fn start(&mut self) {
        if self.state == SessionState::AwaitingStart {
            self.transition(SessionState::Running);
        }
    }

    /// Apply one command from the input boundary
    pub fn handle_command(&mut self, cmd: Command) -> Flow {
        match self.state {
            SessionState::AwaitingStart => match cmd {
                Command::Start => self.start(),
                Command::Quit => return Flow::Exit,
                _ => {}
            },
            SessionState::Running => match cmd {
                Command::MoveLeft => {
                    self.controller.try_move(&self.board, -1, 0);
                }
                Command::MoveRight => {
                    self.controller.try_move(&self.board, 1, 0);
                }
                Command::RotateCw => {
                    self.controller.try_rotate(&self.board);
                }
                Command::SoftDropReset => self.controller.reset_move_delay(),
                Command::Quit => self.transition(SessionState::GameOver),
                Command::Start => {}
            },
            SessionState::GameOver => {
                if cmd == Command::Quit {
                    return Flow::Exit;
                }
            }
        }
        Flow::Continue
    }

    /// Advance gravity by one frame
    ///
    /// Returns the lock event when the piece could not fall and was merged.
    pub fn tick(&mut self) -> Option<LockEvent> {
        if self.state != SessionState::Running {
            return None;
        }

        if self.controller.advance_move_delay() < self.config.ticks_per_drop {
            return None;
        }
        self.controller.reset_move_delay();

        if self.controller.try_move(&self.board, 0, 1) {
            return None;
        }

        let rows_cleared = self.controller.force_lock(&mut self.board, &mut self.source);
        let points = line_clear_points(rows_cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(rows_cleared as u32);
        if points > 0 {
            debug!(rows_cleared, points, score = self.score, "rows scored");
        }

        let game_over = self.controller.is_spawn_blocked(&self.board);
        if game_over {
            self.transition(SessionState::GameOver);
        }

        Some(LockEvent {
            rows_cleared,
            points,
            game_over,
        })
    }

    fn transition(&mut self, next: SessionState) {
        info!(
            from = self.state.as_str(),
            to = next.as_str(),
            score = self.score,
            "session state changed"
        );
        self.state = next;
    }

    /// Replace the falling piece (tests only)
    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: crate::piece::ActivePiece) {
        self.controller = PieceController::new(piece);
    }

    /// Mutable board (tests only)
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
