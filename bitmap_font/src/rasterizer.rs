// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering single characters into a scratch canvas and cropping them.

use image::imageops;
use log::{debug, trace, warn};

use crate::font::Glyph;
use crate::options::WidthPolicy;
use crate::source::{Canvas, FontSource, INK_COLOR};
use crate::Error;

/// Renders one character at a time and crops it to its width.
///
/// A rasterizer owns a square scratch canvas that every call to
/// [`render_glyph`](Self::render_glyph) clears, draws into and reads back.
/// Calls therefore cannot be interleaved; use one rasterizer per worker when
/// baking fonts concurrently.
///
/// The canvas is held until [`release`](Self::release) is called. Afterwards
/// rendering fails and the metric accessors report 0.
#[derive(Debug)]
pub struct GlyphRasterizer<F> {
    font: F,
    width_policy: WidthPolicy,
    /// `None` once released.
    surface: Option<Surface>,
}

#[derive(Debug)]
struct Surface {
    canvas: Canvas,
    /// Distance from the canvas top to the baseline (the font's max ascent).
    baseline: u32,
    ascent: u32,
    descent: u32,
    /// Height of every cropped glyph: max ascent plus descent.
    glyph_height: u32,
}

impl<F: FontSource> GlyphRasterizer<F> {
    /// Creates a rasterizer for `font`.
    ///
    /// The scratch canvas is a square twice the font size on each side, grown
    /// if needed so that a full glyph height always fits.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// if the font reports a zero size or a zero glyph height.
    pub fn new(font: F, width_policy: WidthPolicy) -> Result<Self, Error> {
        let size = font.size();
        if size == 0 {
            return Err(Error::invalid_argument(
                "font size must be greater than zero",
            ));
        }
        let metrics = font.metrics();
        let glyph_height = metrics.glyph_height();
        if glyph_height == 0 {
            return Err(Error::invalid_argument(
                "font max ascent plus descent must be greater than zero",
            ));
        }

        let side = size.saturating_mul(2).max(glyph_height);
        debug!(
            "glyph rasterizer: {side}px canvas, baseline {}, glyph height {glyph_height}",
            metrics.max_ascent
        );

        Ok(Self {
            font,
            width_policy,
            surface: Some(Surface {
                canvas: Canvas::new(side, side),
                baseline: metrics.max_ascent,
                ascent: metrics.ascent,
                descent: metrics.descent,
                glyph_height,
            }),
        })
    }

    /// Renders the character with the given code and crops it.
    ///
    /// Returns `Ok(None)` when the character is not renderable: it has neither
    /// width nor ink, or `code` is not a Unicode scalar value. The returned
    /// glyph owns its pixels and stays valid across later calls.
    ///
    /// Fails with [`ErrorKind::InvalidState`](crate::ErrorKind::InvalidState)
    /// after [`release`](Self::release).
    pub fn render_glyph(&mut self, code: u32) -> Result<Option<Glyph>, Error> {
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| Error::invalid_state("the rasterizer was released"))?;

        surface.canvas.fill(0);
        let Some(ch) = char::from_u32(code) else {
            trace!("code {code:#x} is not a char");
            return Ok(None);
        };
        let baseline = i32::try_from(surface.baseline).unwrap_or(i32::MAX);
        self.font
            .draw_char(&mut surface.canvas, ch, 0, baseline, INK_COLOR);

        let canvas_width = surface.canvas.width();
        let measured_width = self.font.advance_width(ch);
        let ink_width = ink_width(&surface.canvas);
        let ink_lead_margin = ink_lead_margin(&surface.canvas);
        if self.width_policy == WidthPolicy::Measured && measured_width > canvas_width {
            warn!(
                "advance of {ch:?} ({measured_width}px) clamped to canvas width {canvas_width}px"
            );
        }

        let Some(width) = resolve_width(
            self.width_policy,
            measured_width,
            ink_width,
            ink_lead_margin,
            canvas_width,
        ) else {
            trace!("{ch:?} has no width and no ink");
            return Ok(None);
        };

        let crop = imageops::crop_imm(&surface.canvas, 0, 0, width, surface.glyph_height);
        Ok(Some(Glyph::new(crop.to_image())))
    }

    /// Releases the scratch canvas.
    ///
    /// Fails with [`ErrorKind::InvalidState`](crate::ErrorKind::InvalidState)
    /// if the rasterizer was already released.
    pub fn release(&mut self) -> Result<(), Error> {
        match self.surface.take() {
            Some(_) => Ok(()),
            None => Err(Error::invalid_state("the rasterizer was already released")),
        }
    }

    /// Whether [`release`](Self::release) has been called.
    pub fn is_released(&self) -> bool {
        self.surface.is_none()
    }

    /// Distance from the top of each glyph image to the baseline, or 0 after release.
    pub fn baseline(&self) -> u32 {
        self.surface.as_ref().map_or(0, |s| s.baseline)
    }

    /// The font's default ascent, or 0 after release.
    pub fn ascent(&self) -> u32 {
        self.surface.as_ref().map_or(0, |s| s.ascent)
    }

    /// The font's default descent, or 0 after release.
    pub fn descent(&self) -> u32 {
        self.surface.as_ref().map_or(0, |s| s.descent)
    }

    /// Height of every glyph this rasterizer produces, or 0 after release.
    pub fn glyph_height(&self) -> u32 {
        self.surface.as_ref().map_or(0, |s| s.glyph_height)
    }

    /// Width of the scratch canvas, or 0 after release.
    pub fn canvas_width(&self) -> u32 {
        self.surface.as_ref().map_or(0, |s| s.canvas.width())
    }

    /// The width policy chosen at construction.
    pub fn width_policy(&self) -> WidthPolicy {
        self.width_policy
    }
}

/// Picks the crop width for a rendered character, or `None` if it is not renderable.
///
/// Under [`WidthPolicy::InkScan`] the lead margin is added to the ink width
/// rather than subtracted from it, widening the crop by that amount.
fn resolve_width(
    policy: WidthPolicy,
    measured_width: u32,
    ink_width: u32,
    ink_lead_margin: u32,
    canvas_width: u32,
) -> Option<u32> {
    let width = match policy {
        WidthPolicy::Measured => {
            if measured_width != 0 {
                measured_width
            } else {
                ink_width
            }
        }
        WidthPolicy::InkScan => ink_width.saturating_add(ink_lead_margin),
    };
    let width = width.min(canvas_width);
    (width != 0).then_some(width)
}

fn column_has_ink(canvas: &Canvas, x: u32) -> bool {
    (0..canvas.height()).any(|y| canvas.get_pixel(x, y).0[0] > 0)
}

/// One past the rightmost column holding ink, or 0 for a blank canvas.
fn ink_width(canvas: &Canvas) -> u32 {
    (0..canvas.width())
        .rev()
        .find(|&x| column_has_ink(canvas, x))
        .map_or(0, |x| x + 1)
}

/// One past the leftmost column holding ink, or 0 for a blank canvas.
fn ink_lead_margin(canvas: &Canvas) -> u32 {
    (0..canvas.width())
        .find(|&x| column_has_ink(canvas, x))
        .map_or(0, |x| x + 1)
}
