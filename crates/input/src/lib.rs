//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and drains
//! whatever arrived since the last frame without blocking. Nothing here
//! knows about the session; the frame loop forwards the commands.

pub mod map;

pub use blockfall_types as types;

pub use map::handle_key_event;

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::types::Command;

/// Upper bound on commands taken from the terminal in one frame.
///
/// Anything beyond this stays queued in the terminal for the next frame.
pub const MAX_COMMANDS_PER_FRAME: usize = 16;

/// Commands collected during one frame.
pub type FrameCommands = ArrayVec<Command, MAX_COMMANDS_PER_FRAME>;

/// Translate one terminal event.
///
/// Only key presses and terminal auto-repeats produce commands; releases,
/// mouse, focus and resize events are ignored.
pub fn command_for_event(ev: &Event) -> Option<Command> {
    match ev {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => handle_key_event(*key),
            KeyEventKind::Release => None,
        },
        _ => None,
    }
}

/// Collect commands from an event sequence, stopping when the buffer is full.
pub fn collect_commands<I>(events: I) -> FrameCommands
where
    I: IntoIterator<Item = Event>,
{
    let mut out = FrameCommands::new();
    for ev in events {
        if out.is_full() {
            break;
        }
        if let Some(cmd) = command_for_event(&ev) {
            out.push(cmd);
        }
    }
    out
}

/// Drain pending terminal events without waiting.
pub fn drain_commands() -> io::Result<FrameCommands> {
    let mut out = FrameCommands::new();
    while !out.is_full() && event::poll(Duration::ZERO)? {
        if let Some(cmd) = command_for_event(&event::read()?) {
            out.push(cmd);
        }
    }
    Ok(out)
}
