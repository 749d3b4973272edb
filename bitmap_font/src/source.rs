// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the baker and the vector font that feeds it.

use image::{Rgb, RgbImage};

/// The pixel surface glyphs are drawn onto.
///
/// Glyphs are stored as full-color rasters. Only the red channel is inspected
/// when looking for ink.
pub type Canvas = RgbImage;

/// The color glyphs are drawn in. The canvas is cleared to black beforehand.
pub const INK_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Font-wide vertical metrics in whole pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FontMetrics {
    /// Default distance from the baseline to the top of typical glyphs.
    pub ascent: u32,
    /// Default distance from the baseline to the bottom of typical glyphs.
    pub descent: u32,
    /// Largest distance any glyph of the font reaches above the baseline.
    pub max_ascent: u32,
}

impl FontMetrics {
    /// Height of a canvas that fits every glyph: max ascent plus descent.
    pub const fn glyph_height(&self) -> u32 {
        self.max_ascent + self.descent
    }
}

/// A vector font resolved to a concrete face and size.
///
/// Implementations own whatever handles are needed to measure and draw single
/// characters. Drawing takes `&mut self` so implementations can keep scratch
/// space such as a scaling context.
pub trait FontSource {
    /// Nominal size of the font in pixels per em.
    fn size(&self) -> u32;

    /// Font-wide vertical metrics.
    fn metrics(&self) -> FontMetrics;

    /// Horizontal distance the pen moves after drawing `ch`.
    ///
    /// Returns 0 for characters the font cannot draw.
    fn advance_width(&self, ch: char) -> u32;

    /// Draws `ch` onto `canvas` in `color`, with the pen at `x` and the
    /// baseline at `baseline_y`.
    ///
    /// Pixels falling outside the canvas are discarded.
    fn draw_char(
        &mut self,
        canvas: &mut Canvas,
        ch: char,
        x: i32,
        baseline_y: i32,
        color: Rgb<u8>,
    );
}

impl<F: FontSource + ?Sized> FontSource for &mut F {
    fn size(&self) -> u32 {
        (**self).size()
    }

    fn metrics(&self) -> FontMetrics {
        (**self).metrics()
    }

    fn advance_width(&self, ch: char) -> u32 {
        (**self).advance_width(ch)
    }

    fn draw_char(
        &mut self,
        canvas: &mut Canvas,
        ch: char,
        x: i32,
        baseline_y: i32,
        color: Rgb<u8>,
    ) {
        (**self).draw_char(canvas, ch, x, baseline_y, color);
    }
}

impl<F: FontSource + ?Sized> FontSource for Box<F> {
    fn size(&self) -> u32 {
        (**self).size()
    }

    fn metrics(&self) -> FontMetrics {
        (**self).metrics()
    }

    fn advance_width(&self, ch: char) -> u32 {
        (**self).advance_width(ch)
    }

    fn draw_char(
        &mut self,
        canvas: &mut Canvas,
        ch: char,
        x: i32,
        baseline_y: i32,
        color: Rgb<u8>,
    ) {
        (**self).draw_char(canvas, ch, x, baseline_y, color);
    }
}
