// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`FontSource`] for OpenType and TrueType data, drawn with Swash.

use core::fmt::{Debug, Formatter};

use image::Rgb;
use skrifa::instance::{LocationRef, Size};
use skrifa::{GlyphId, MetadataProvider};
use swash::scale::image::{Content, Image as SwashImage};
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;

use crate::source::{Canvas, FontMetrics, FontSource};
use crate::Error;

/// A font face loaded from memory at a fixed pixel size.
///
/// Metrics and the character map are read with Skrifa; glyph outlines are
/// scaled and rasterized with Swash, hinted, into an alpha mask that is then
/// blended onto the canvas.
///
/// Control characters and characters the face does not map report a zero
/// advance and draw nothing, so they end up absent in a baked font.
pub struct SwashFont {
    data: Vec<u8>,
    index: u32,
    size: u32,
    metrics: FontMetrics,
    context: ScaleContext,
}

impl SwashFont {
    /// Loads face `index` of `data` (0 for single-face files) at `size` pixels per em.
    ///
    /// Fails with [`ErrorKind::MalformedFont`](crate::ErrorKind::MalformedFont)
    /// if the data holds no such face.
    pub fn new(data: Vec<u8>, index: u32, size: u32) -> Result<Self, Error> {
        let font = skrifa::FontRef::from_index(&data, index)
            .map_err(|_| Error::malformed_font("font data could not be parsed"))?;
        let swash_index = usize::try_from(index)
            .map_err(|_| Error::malformed_font("font index out of range"))?;
        if swash::FontRef::from_index(&data, swash_index).is_none() {
            return Err(Error::malformed_font("font data could not be parsed"));
        }

        let scaled = font.metrics(Size::new(size as f32), LocationRef::default());
        let ascent = to_pixels(scaled.ascent);
        let descent = to_pixels(-scaled.descent);
        let max_ascent = scaled
            .bounds
            .map_or(ascent, |bounds| to_pixels(bounds.y_max.ceil()))
            .max(ascent);

        Ok(Self {
            data,
            index,
            size,
            metrics: FontMetrics {
                ascent,
                descent,
                max_ascent,
            },
            context: ScaleContext::new(),
        })
    }

    /// The raw font data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Index of the face within the font data.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The glyph drawn for `ch`, if it is printable and mapped.
    fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        if ch.is_control() {
            return None;
        }
        let font = skrifa::FontRef::from_index(&self.data, self.index).ok()?;
        font.charmap().map(ch).filter(|id| *id != GlyphId::NOTDEF)
    }
}

impl FontSource for SwashFont {
    fn size(&self) -> u32 {
        self.size
    }

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn advance_width(&self, ch: char) -> u32 {
        let Some(glyph_id) = self.glyph_id(ch) else {
            return 0;
        };
        let Ok(font) = skrifa::FontRef::from_index(&self.data, self.index) else {
            return 0;
        };
        font.glyph_metrics(Size::new(self.size as f32), LocationRef::default())
            .advance_width(glyph_id)
            .map_or(0, to_pixels)
    }

    fn draw_char(
        &mut self,
        canvas: &mut Canvas,
        ch: char,
        x: i32,
        baseline_y: i32,
        color: Rgb<u8>,
    ) {
        let Some(glyph_id) = self.glyph_id(ch) else {
            return;
        };
        // Swash addresses glyphs with 16-bit ids.
        let Ok(glyph_id) = u16::try_from(glyph_id.to_u32()) else {
            return;
        };
        let Some(font) = usize::try_from(self.index)
            .ok()
            .and_then(|index| swash::FontRef::from_index(&self.data, index))
        else {
            return;
        };

        let mut scaler = self
            .context
            .builder(font)
            .size(self.size as f32)
            .hint(true)
            .build();
        let Some(rendered) = Render::new(&[Source::Outline])
            .format(Format::Alpha)
            .render(&mut scaler, glyph_id)
        else {
            return;
        };

        blend_mask(canvas, &rendered, x, baseline_y, color);
    }
}

impl Debug for SwashFont {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwashFont")
            .field("index", &self.index)
            .field("size", &self.size)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "font metrics in pixels are far below u32::MAX; negative values saturate to 0"
)]
fn to_pixels(value: f32) -> u32 {
    value.round().max(0.0) as u32
}

/// Blends a Swash alpha mask onto `canvas`, placed relative to the pen at
/// `(x, baseline_y)`. Coverage only ever brightens existing pixels.
fn blend_mask(canvas: &mut Canvas, rendered: &SwashImage, x: i32, baseline_y: i32, color: Rgb<u8>) {
    if !matches!(rendered.content, Content::Mask) {
        return;
    }
    let Ok(width) = usize::try_from(rendered.placement.width) else {
        return;
    };
    if width == 0 {
        return;
    }

    let origin_x = i64::from(x) + i64::from(rendered.placement.left);
    let origin_y = i64::from(baseline_y) - i64::from(rendered.placement.top);
    for (dy, row) in (0_i64..).zip(rendered.data.chunks_exact(width)) {
        let Ok(py) = u32::try_from(origin_y + dy) else {
            continue;
        };
        if py >= canvas.height() {
            break;
        }
        for (dx, &alpha) in (0_i64..).zip(row) {
            if alpha == 0 {
                continue;
            }
            let Ok(px) = u32::try_from(origin_x + dx) else {
                continue;
            };
            if px >= canvas.width() {
                break;
            }
            let pixel = canvas.get_pixel_mut(px, py);
            for (dst, src) in pixel.0.iter_mut().zip(color.0) {
                let covered = (u16::from(src) * u16::from(alpha) + 127) / 255;
                *dst = (*dst).max(u8::try_from(covered).unwrap_or(u8::MAX));
            }
        }
    }
}
