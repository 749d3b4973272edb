// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A font made of solid blocks, so every rendered pixel is predictable.

use std::collections::BTreeMap;

use bitmap_font::image::Rgb;
use bitmap_font::{Canvas, FontMetrics, FontSource};

/// A font whose glyphs are solid rectangles standing on the baseline.
///
/// This mirrors the library's private `RectFont` unit test helper, which is not
/// exported, and adds a draw counter and [`from_widths`](Self::from_widths) for
/// packing tests.
#[derive(Debug, Clone)]
pub(crate) struct BlockFont {
    size: u32,
    metrics: FontMetrics,
    blocks: BTreeMap<char, Block>,
    /// Number of `draw_char` calls so far.
    pub(crate) draws: usize,
}

#[derive(Debug, Clone, Copy)]
struct Block {
    advance: u32,
    x: u32,
    width: u32,
    height: u32,
}

impl BlockFont {
    pub(crate) fn new(size: u32, ascent: u32, descent: u32, max_ascent: u32) -> Self {
        Self {
            size,
            metrics: FontMetrics {
                ascent,
                descent,
                max_ascent,
            },
            blocks: BTreeMap::new(),
            draws: 0,
        }
    }

    /// Adds a block for `ch` spanning columns `x..x + width`, rising `height`
    /// pixels from the baseline, with the given advance.
    pub(crate) fn block(mut self, ch: char, advance: u32, x: u32, width: u32, height: u32) -> Self {
        self.blocks.insert(
            ch,
            Block {
                advance,
                x,
                width,
                height,
            },
        );
        self
    }

    /// A font where code `i` is a block of width `widths[i]` and advance
    /// `widths[i]`, with `None` leaving the code blank.
    pub(crate) fn from_widths(widths: &[Option<u32>]) -> Self {
        let mut font = Self::new(12, 8, 3, 9);
        for (code, width) in (0_u32..).zip(widths) {
            if let (Some(width), Some(ch)) = (width, char::from_u32(code)) {
                font = font.block(ch, *width, 0, *width, 6);
            }
        }
        font
    }
}

impl FontSource for BlockFont {
    fn size(&self) -> u32 {
        self.size
    }

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn advance_width(&self, ch: char) -> u32 {
        self.blocks.get(&ch).map_or(0, |block| block.advance)
    }

    fn draw_char(
        &mut self,
        canvas: &mut Canvas,
        ch: char,
        x: i32,
        baseline_y: i32,
        color: Rgb<u8>,
    ) {
        self.draws += 1;
        let Some(block) = self.blocks.get(&ch) else {
            return;
        };
        let left = i64::from(x) + i64::from(block.x);
        let top = i64::from(baseline_y) - i64::from(block.height);
        for py in top..top + i64::from(block.height) {
            for px in left..left + i64::from(block.width) {
                let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) else {
                    continue;
                };
                if px < canvas.width() && py < canvas.height() {
                    canvas.put_pixel(px, py, color);
                }
            }
        }
    }
}

/// Size 16, ascent 12, descent 4, max ascent 14 (glyph height 18).
///
/// - `A`: a 10x14 block with advance 9.
/// - `g`: a 6x14 block at x = 1 with advance 8; it reaches above the default ascent.
/// - `_`: a 9x1 block at x = 2 with advance 0.
/// - ` `: no ink, advance 4.
///
/// Everything else is blank with no advance.
pub(crate) fn letter_font() -> BlockFont {
    BlockFont::new(16, 12, 4, 14)
        .block('A', 9, 0, 10, 14)
        .block('g', 8, 1, 6, 14)
        .block('_', 0, 2, 9, 1)
        .block(' ', 4, 0, 0, 0)
}
