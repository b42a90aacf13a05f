//! Terminal renderer — paints frames as text.
//!
//! The board becomes a character grid; tiles drawn over board cells (the drag
//! ghost) are overlaid on it, tiles elsewhere (tray, HUD swatches) are dropped.
//! HUD text is listed below the grid.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::io::{self, Write};

use canvas::consts::COLOR_BACKGROUND;
use canvas::render::Renderer;
use canvas::{GridGeometry, Point, TileKind};

#[derive(Debug, Default)]
pub struct TerminalRenderer {
    colored: bool,
    width: usize,
    cells: Vec<TileKind>,
    texts: Vec<String>,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(colored: bool) -> Self {
        Self { colored, ..Self::default() }
    }

    /// The current frame as text.
    #[must_use]
    pub fn frame(&self) -> String {
        let mut out = String::new();
        for row in self.cells.chunks(self.width.max(1)) {
            for kind in row {
                if self.colored {
                    out.push_str(&ansi(kind.color(), COLOR_BACKGROUND));
                }
                out.push(glyph(*kind));
            }
            if self.colored {
                out.push_str("\x1b[0m");
            }
            out.push('\n');
        }
        for text in &self.texts {
            for line in text.lines() {
                out.push_str(line.trim());
                out.push('\n');
            }
        }
        out
    }

    /// Write the frame and start a new one.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn present(&mut self, out: &mut impl Write) -> io::Result<()> {
        let frame = self.frame();
        out.write_all(frame.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        self.cells.clear();
        self.texts.clear();
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn draw_board(&mut self, width: usize, cells: &[TileKind]) {
        self.width = width;
        self.cells = cells.to_vec();
    }

    fn draw_tile(&mut self, position: Point, _size: f64, kind: TileKind, _alpha: f64) {
        let cell = GridGeometry::new(self.width).world_to_board(position);
        let (Ok(x), Ok(y)) = (usize::try_from(cell.x), usize::try_from(cell.y)) else {
            return;
        };
        if x < self.width && y < self.width {
            if let Some(slot) = self.cells.get_mut(y * self.width + x) {
                *slot = kind;
            }
        }
    }

    fn draw_text(&mut self, label: &str, _position: Point) {
        self.texts.push(label.to_owned());
    }
}

#[must_use]
pub fn glyph(kind: TileKind) -> char {
    match kind {
        TileKind::Clear => '.',
        TileKind::BlockWhite => 'w',
        TileKind::BlockBlack => 'b',
        TileKind::PlayerWhite => 'W',
        TileKind::PlayerBlack => 'B',
        TileKind::PlayerBoth => 'X',
        TileKind::MoveCandidate => '+',
    }
}

fn ansi(fg: u32, bg: u32) -> String {
    let (fr, fg_, fb) = rgb(fg);
    let (br, bg_, bb) = rgb(bg);
    format!("\x1b[38;2;{fr};{fg_};{fb}m\x1b[48;2;{br};{bg_};{bb}m")
}

fn rgb(color: u32) -> (u32, u32, u32) {
    ((color >> 16) & 0xFF, (color >> 8) & 0xFF, color & 0xFF)
}
