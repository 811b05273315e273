//! TerminalRenderer: flushes a canvas to the real terminal.
//!
//! Each frame is diffed against the one on screen and only changed runs of
//! glyphs are rewritten. The byte stream is built in memory first so a frame
//! reaches the terminal in a single write.

use std::io::{self, Write};
use std::mem;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Canvas, Glyph, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows; `None` forces a full redraw.
    shown: Option<Canvas>,
    bytes: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes.queue(terminal::EnterAlternateScreen)?;
        self.bytes.queue(cursor::Hide)?;
        self.bytes.queue(terminal::DisableLineWrap)?;
        self.flush()?;
        self.shown = None;
        Ok(())
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes.queue(ResetColor)?;
        self.bytes.queue(SetAttribute(Attribute::Reset))?;
        self.bytes.queue(terminal::EnableLineWrap)?;
        self.bytes.queue(cursor::Show)?;
        self.bytes.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Show `frame`, then hand back the previous frame's canvas for reuse.
    ///
    /// The caller keeps one canvas alive across frames; after this returns it
    /// holds stale contents and must be cleared before drawing.
    pub fn present(&mut self, frame: &mut Canvas) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.shown.as_ref(), frame, &mut self.bytes)?;
        self.flush()?;

        match self.shown.as_mut() {
            Some(shown) => mem::swap(shown, frame),
            None => self.shown = Some(frame.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.bytes)?;
        self.stdout.flush()
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// Without a previous frame, or when the size changed, the screen is cleared
/// and every row is written.
pub fn encode_frame(prev: Option<&Canvas>, next: &Canvas, out: &mut Vec<u8>) -> io::Result<()> {
    let prev = prev.filter(|p| (p.width(), p.height()) == (next.width(), next.height()));
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen: Option<Style> = None;
    for y in 0..next.height() {
        let row = next.row(y);
        let runs = match prev {
            Some(p) => changed_runs(p.row(y), row),
            None => vec![(0, row.len())],
        };
        for (start, end) in runs {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for glyph in &row[start..end] {
                if pen != Some(glyph.style) {
                    apply_style(out, glyph.style)?;
                    pen = Some(glyph.style);
                }
                out.queue(Print(glyph.ch))?;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Half-open column ranges where two equally sized rows differ.
fn changed_runs(before: &[Glyph], after: &[Glyph]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;
    for (x, (a, b)) in before.iter().zip(after).enumerate() {
        match (a == b, open) {
            (false, None) => open = Some(x),
            (true, Some(start)) => {
                runs.push((start, x));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        runs.push((start, after.len()));
    }
    runs
}

fn apply_style(out: &mut Vec<u8>, style: Style) -> io::Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(text: &str) -> Vec<Glyph> {
        text.chars().map(|ch| Style::default().glyph(ch)).collect()
    }

    #[test]
    fn test_changed_runs_coalesce_adjacent_cells() {
        assert_eq!(changed_runs(&row("abcde"), &row("aXXXe")), vec![(1, 4)]);
        assert_eq!(changed_runs(&row("abcde"), &row("Xbcd.")), vec![(0, 1), (4, 5)]);
        assert!(changed_runs(&row("same"), &row("same")).is_empty());
    }

    #[test]
    fn test_unchanged_frame_writes_no_glyphs() {
        let mut canvas = Canvas::new(4, 2);
        canvas.text(0, 0, "zz", Style::default());
        let mut out = Vec::new();
        encode_frame(Some(&canvas), &canvas, &mut out).unwrap();
        assert!(!out.contains(&b'z'));
    }

    #[test]
    fn test_first_frame_clears_and_writes_everything() {
        let mut canvas = Canvas::new(3, 1);
        canvas.text(0, 0, "abc", Style::default());
        let mut out = Vec::new();
        encode_frame(None, &canvas, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("\x1b[2J"));
        assert!(text.contains("abc"));
    }

    #[test]
    fn test_resize_forces_full_redraw() {
        let small = Canvas::new(2, 1);
        let mut big = Canvas::new(3, 1);
        big.text(0, 0, "xyz", Style::default());
        let mut out = Vec::new();
        encode_frame(Some(&small), &big, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("xyz"));
    }
}
