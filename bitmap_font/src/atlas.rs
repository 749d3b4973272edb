// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packing the glyphs of a [`BitmapFont`] into a single row.

use image::imageops;
use log::debug;

use crate::font::{BitmapFont, FontRasterMetrics};
use crate::source::Canvas;

/// A [`BitmapFont`] whose glyphs are merged into one image.
///
/// Glyphs are placed left to right in character code order, without gaps,
/// so the image is as wide as all rendered glyphs together and exactly one
/// glyph high. Characters that were not rendered take no space: their width
/// is 0 and their x position is that of the next rendered glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtlasBitmapFont {
    image: Canvas,
    glyph_x: Vec<u32>,
    glyph_width: Vec<u32>,
    metrics: FontRasterMetrics,
}

/// Where one character lives inside an [`AtlasBitmapFont`] image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AtlasRegion {
    /// Left edge in the atlas.
    pub x: u32,
    /// Width in pixels; never zero.
    pub width: u32,
    /// Height in pixels; always the font's glyph height.
    pub height: u32,
}

/// The placement data of an [`AtlasBitmapFont`] without its pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtlasLayout {
    /// Width of the atlas image.
    pub width: u32,
    /// Height of the atlas image.
    pub height: u32,
    /// Font-wide metrics copied from the source font.
    pub metrics: FontRasterMetrics,
    /// Left edge of each character, indexed by character code.
    pub glyph_x: Vec<u32>,
    /// Width of each character, indexed by character code. Zero if absent.
    pub glyph_width: Vec<u32>,
}

impl AtlasBitmapFont {
    /// Packs every rendered glyph of `font` into one image.
    pub fn pack(font: &BitmapFont) -> Self {
        let glyphs = font.glyphs();
        let width: u32 = glyphs.iter().flatten().map(|glyph| glyph.width()).sum();
        let height = font.glyph_height();

        let mut image = Canvas::new(width, height);
        let mut glyph_x = Vec::with_capacity(glyphs.len());
        let mut glyph_width = Vec::with_capacity(glyphs.len());

        let mut x = 0;
        for glyph in glyphs {
            glyph_x.push(x);
            match glyph {
                Some(glyph) => {
                    imageops::replace(&mut image, glyph.image(), i64::from(x), 0);
                    glyph_width.push(glyph.width());
                    x += glyph.width();
                }
                None => glyph_width.push(0),
            }
        }
        debug!(
            "packed {} glyphs into a {width}x{height} atlas",
            glyphs.len()
        );

        Self {
            image,
            glyph_x,
            glyph_width,
            metrics: font.metrics(),
        }
    }

    /// The merged glyph image.
    pub fn image(&self) -> &Canvas {
        &self.image
    }

    /// Consumes the atlas, returning its image.
    pub fn into_image(self) -> Canvas {
        self.image
    }

    /// Left edge of each character in the image, indexed by character code.
    pub fn glyph_x(&self) -> &[u32] {
        &self.glyph_x
    }

    /// Width of each character in the image, indexed by character code.
    ///
    /// Zero for characters that were not rendered.
    pub fn glyph_width(&self) -> &[u32] {
        &self.glyph_width
    }

    /// The metrics of the font this atlas was packed from.
    pub fn metrics(&self) -> FontRasterMetrics {
        self.metrics
    }

    /// The region holding `code`, or `None` if it is out of range or was not rendered.
    pub fn region(&self, code: u32) -> Option<AtlasRegion> {
        let index = usize::try_from(code).ok()?;
        let width = *self.glyph_width.get(index)?;
        if width == 0 {
            return None;
        }
        Some(AtlasRegion {
            x: self.glyph_x[index],
            width,
            height: self.image.height(),
        })
    }

    /// Sum of the glyph widths of the characters in `text`.
    ///
    /// Characters outside the baked range or without a glyph count as zero.
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars()
            .filter_map(|ch| self.region(u32::from(ch)))
            .map(|region| region.width)
            .sum()
    }

    /// Copies out the placement data.
    pub fn layout(&self) -> AtlasLayout {
        AtlasLayout {
            width: self.image.width(),
            height: self.image.height(),
            metrics: self.metrics,
            glyph_x: self.glyph_x.clone(),
            glyph_width: self.glyph_width.clone(),
        }
    }
}

impl From<&BitmapFont> for AtlasBitmapFont {
    fn from(font: &BitmapFont) -> Self {
        Self::pack(font)
    }
}
