//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previously drawn one and only changed runs
//! of cells are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    /// Terminal reports key release events (needed for a held soft drop)
    key_release_events: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            key_release_events: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.key_release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        if self.key_release_events {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        if self.key_release_events {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.key_release_events = false;
        }
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Whether the terminal was switched into reporting key releases.
    pub fn key_release_events(&self) -> bool {
        self.key_release_events
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        // A missing previous frame forces a full redraw.
        let (mut prev, needs_full) = match self.last.take() {
            Some(prev) => {
                let resized = prev.width() != fb.width() || prev.height() != fb.height();
                (prev, resized)
            }
            None => (FrameBuffer::new(fb.width(), fb.height()), true),
        };

        self.buf.clear();
        if needs_full {
            encode_full_into(fb, &mut self.buf)?;
            prev.resize(fb.width(), fb.height());
        } else {
            encode_diff_into(&prev, fb, &mut self.buf)?;
        }
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full redraw of `fb` into `out`, one cursor move per row.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = StylePen::default();
    let w = fb.width() as usize;
    if w > 0 {
        for (y, row) in fb.cells().chunks(w).enumerate() {
            out.queue(cursor::MoveTo(0, y as u16))?;
            for &cell in row {
                pen.print(out, cell)?;
            }
        }
    }

    reset_style_into(out)
}

/// Encode only the runs of cells that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = StylePen::default();

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        let start = y as usize * next.width() as usize + x as usize;
        for &cell in &next.cells()[start..start + len as usize] {
            pen.print(out, cell)?;
        }
        Ok(())
    })?;

    reset_style_into(out)
}

/// Remembers the last style sent so consecutive cells sharing it cost nothing.
#[derive(Default)]
struct StylePen {
    current: Option<CellStyle>,
}

impl StylePen {
    fn print(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        if self.current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            self.current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn reset_style_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each horizontal run of changed cells.
///
/// Frames of different sizes are entirely dirty, one run per row.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width() as usize;
    if w == 0 {
        return Ok(());
    }
    let resized = prev.width() != next.width() || prev.height() != next.height();

    for (y, row) in next.cells().chunks(w).enumerate() {
        if resized {
            f(0, y as u16, next.width())?;
            continue;
        }

        let old = &prev.cells()[y * w..(y + 1) * w];
        let mut x = 0;
        while x < w {
            if old[x] == row[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && old[x] != row[x] {
                x += 1;
            }
            f(start as u16, y as u16, (x - start) as u16)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
        let mut out = Vec::new();
        for_each_changed_run(prev, next, |x, y, len| {
            out.push((x, y, len));
            Ok(())
        })
        .unwrap();
        out
    }

    #[test]
    fn full_redraw_positions_each_row() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "██", CellStyle::default());
        fb.put_str(0, 1, "··", CellStyle::default());

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);

        assert!(text.contains("\x1b[1;1H"));
        assert!(text.contains("\x1b[2;1H"));
        assert!(text.contains("██"));
        assert!(text.contains("··"));
    }

    #[test]
    fn one_style_is_sent_once_per_frame() {
        let fb = FrameBuffer::new(6, 3);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches("\x1b[38;2;").count(), 1);
    }

    #[test]
    fn diff_writes_only_the_changed_cell() {
        let prev = FrameBuffer::new(5, 3);
        let mut next = prev.clone();
        let ghost = CellStyle::default().dim();
        next.put_char(2, 1, '░', ghost);

        let mut out = Vec::new();
        encode_diff_into(&prev, &next, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);

        assert!(text.contains("\x1b[2;3H"));
        assert_eq!(text.matches('░').count(), 1);
        assert!(!text.contains(' '));
    }

    #[test]
    fn unchanged_frame_has_no_runs() {
        let fb = FrameBuffer::new(4, 3);
        assert!(runs(&fb, &fb.clone()).is_empty());
    }

    #[test]
    fn adjacent_changes_form_one_run() {
        let prev = FrameBuffer::new(8, 2);
        let mut next = prev.clone();
        next.put_str(1, 1, "SCORE", CellStyle::default().bold());
        next.put_char(7, 0, '█', CellStyle::default());

        assert_eq!(runs(&prev, &next), vec![(7, 0, 1), (1, 1, 5)]);
    }

    #[test]
    fn resized_frame_is_fully_dirty() {
        let prev = FrameBuffer::new(2, 1);
        let next = FrameBuffer::new(3, 2);
        assert_eq!(runs(&prev, &next), vec![(0, 0, 3), (0, 1, 3)]);
    }
}
