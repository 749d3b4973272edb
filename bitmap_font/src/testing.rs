// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A synthetic font for unit tests.
//!
//! Unit tests cannot reach the helpers of the `bitmap_font_tests` crate, so this
//! is a minimal in-crate counterpart of its `BlockFont`. Keep the two in step.

use std::collections::HashMap;

use image::Rgb;

use crate::source::{Canvas, FontMetrics, FontSource};

/// A font whose glyphs are solid rectangles standing on the baseline.
#[derive(Debug, Clone)]
pub(crate) struct RectFont {
    size: u32,
    metrics: FontMetrics,
    glyphs: HashMap<char, RectGlyph>,
}

#[derive(Debug, Clone, Copy)]
struct RectGlyph {
    advance: u32,
    x: u32,
    width: u32,
    height: u32,
}

impl RectFont {
    pub(crate) fn new(size: u32, ascent: u32, descent: u32, max_ascent: u32) -> Self {
        Self {
            size,
            metrics: FontMetrics {
                ascent,
                descent,
                max_ascent,
            },
            glyphs: HashMap::new(),
        }
    }

    /// Adds a glyph with the given advance whose ink spans `x..x + width`
    /// horizontally and rises `height` pixels from the baseline.
    pub(crate) fn with_glyph(
        mut self,
        ch: char,
        advance: u32,
        x: u32,
        width: u32,
        height: u32,
    ) -> Self {
        self.glyphs.insert(
            ch,
            RectGlyph {
                advance,
                x,
                width,
                height,
            },
        );
        self
    }
}

impl FontSource for RectFont {
    fn size(&self) -> u32 {
        self.size
    }

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn advance_width(&self, ch: char) -> u32 {
        self.glyphs.get(&ch).map_or(0, |g| g.advance)
    }

    fn draw_char(
        &mut self,
        canvas: &mut Canvas,
        ch: char,
        x: i32,
        baseline_y: i32,
        color: Rgb<u8>,
    ) {
        let Some(glyph) = self.glyphs.get(&ch) else {
            return;
        };
        let left = i64::from(x) + i64::from(glyph.x);
        let top = i64::from(baseline_y) - i64::from(glyph.height);
        for py in top..top + i64::from(glyph.height) {
            for px in left..left + i64::from(glyph.width) {
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

/// Size 16, ascent 12, descent 4, max ascent 14.
///
/// `A` is a 10x14 block with advance 9; `B` is a 7x12 block at x = 1 with
/// advance 8. Everything else, including control characters, is blank.
pub(crate) fn block_font() -> RectFont {
    RectFont::new(16, 12, 4, 14)
        .with_glyph('A', 9, 0, 10, 14)
        .with_glyph('B', 8, 1, 7, 12)
}
