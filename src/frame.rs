use font8x8::{BASIC_FONTS, UnicodeFonts};

use crate::render::{Canvas, Placement, Rgba};
use crate::utils::{Cell, GRID_SIZE};

/// side of the square pixel buffer
pub const FRAME_SIZE: u32 = 600;

const GLYPH: i32 = 8;
const TEXT_SCALE: i32 = 2;
const LINE_GAP: i32 = 6;
const MARGIN: i32 = 30;

/// [`Canvas`] over a square RGBA buffer, such as the `pixels` frame.
/// Row 0 of the buffer is the top of the screen, so grid rows are flipped.
pub struct FrameCanvas<'a> {
    frame: &'a mut [u8],
    size: i32,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut [u8], size: u32) -> Self {
        Self { frame, size: size as i32 }
    }

    fn cell_px(&self) -> i32 {
        self.size / GRID_SIZE
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.size || y >= self.size {
            return;
        }
        let i = ((y * self.size + x) * 4) as usize;
        if i + 4 <= self.frame.len() {
            self.frame[i..i + 4].copy_from_slice(&color.0);
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, color);
            }
        }
    }

    fn text_width(text: &str) -> i32 {
        text.chars().count() as i32 * GLYPH * TEXT_SCALE
    }
}

impl Canvas for FrameCanvas<'_> {
    fn clear(&mut self, color: Rgba) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color.0);
        }
    }

    fn draw_grid(&mut self, color: Rgba) {
        let step = self.cell_px();
        for i in 0..=GRID_SIZE {
            let pos = (i * step).min(self.size - 1);
            self.fill_rect(pos, 0, 1, self.size, color);
            self.fill_rect(0, pos, self.size, 1, color);
        }
    }

    fn fill_cell(&mut self, cell: Cell, color: Rgba) {
        let step = self.cell_px();
        let row = GRID_SIZE - 1 - cell.y;
        self.fill_rect(cell.x * step, row * step, step, step, color);
    }

    fn draw_text(&mut self, text: &str, placement: Placement, color: Rgba) {
        let glyph_px = GLYPH * TEXT_SCALE;
        let (x, y) = match placement {
            Placement::TopLeft => (MARGIN, MARGIN),
            Placement::TopRight => (self.size - MARGIN - Self::text_width(text), MARGIN),
            Placement::Centered(line) => (
                (self.size - Self::text_width(text)) / 2,
                self.size / 2 - glyph_px / 2 + line * (glyph_px + LINE_GAP),
            ),
        };

        for (n, ch) in text.chars().enumerate() {
            let Some(glyph) = BASIC_FONTS.get(ch) else {
                continue;
            };
            let cx = x + n as i32 * glyph_px;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH {
                    if (bits >> col) & 1 == 1 {
                        self.fill_rect(
                            cx + col * TEXT_SCALE,
                            y + row as i32 * TEXT_SCALE,
                            TEXT_SCALE,
                            TEXT_SCALE,
                            color,
                        );
                    }
                }
            }
        }
    }
}
