//! Braille terminal canvas: every terminal cell holds a 2x4 grid of dots

use super::Canvas;
use crate::style::Rgb;
use crate::terminal::Terminal;

/// Dot offsets (row, column) inside a cell and their braille bit.
const DOT_BITS: [(usize, usize, u8); 8] = [
    (0, 0, 0x01),
    (1, 0, 0x02),
    (2, 0, 0x04),
    (0, 1, 0x08),
    (1, 1, 0x10),
    (2, 1, 0x20),
    (3, 0, 0x40),
    (3, 1, 0x80),
];

pub struct BrailleCanvas {
    cols: u16,
    rows: u16,
    dots: Vec<Option<Rgb>>,
}

impl BrailleCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            dots: vec![None; cols as usize * 2 * rows as usize * 4],
        }
    }

    fn dot_width(&self) -> usize {
        self.cols as usize * 2
    }

    /// Braille character and color for the cell at (cx, cy), if any dot is set.
    ///
    /// The cell takes the color of its last dot in reading order.
    pub fn cell(&self, cx: u16, cy: u16) -> Option<(char, Rgb)> {
        let bx = cx as usize * 2;
        let by = cy as usize * 4;
        let mut bits: u8 = 0;
        let mut color = None;
        for &(dy, dx, bit) in &DOT_BITS {
            if let Some(c) = self.dots[(by + dy) * self.dot_width() + bx + dx] {
                bits |= bit;
                color = Some(c);
            }
        }
        let color = color?;
        let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
        Some((ch, color))
    }

    /// Copy every painted cell into the terminal back buffer.
    pub fn blit(&self, term: &mut Terminal) {
        for cy in 0..self.rows {
            for cx in 0..self.cols {
                if let Some((ch, color)) = self.cell(cx, cy) {
                    term.set(cx as i32, cy as i32, ch, Some(color.into()), false);
                }
            }
        }
    }
}

impl Canvas for BrailleCanvas {
    fn size(&self) -> (u32, u32) {
        (self.cols as u32 * 2, self.rows as u32 * 4)
    }

    /// Resets every dot. The background itself belongs to the terminal.
    fn clear(&mut self, _color: Rgb) {
        self.dots.fill(None);
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        let (w, h) = self.size();
        if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
            let idx = y as usize * self.dot_width() + x as usize;
            self.dots[idx] = Some(color);
        }
    }
}
