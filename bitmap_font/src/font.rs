// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Baked glyphs and the builder that produces them.

use log::debug;

use crate::options::{BitmapFontOptions, WidthPolicy};
use crate::rasterizer::GlyphRasterizer;
use crate::source::{Canvas, FontSource};
use crate::Error;

/// The cropped raster image of one character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    image: Canvas,
}

impl Glyph {
    pub(crate) fn new(image: Canvas) -> Self {
        Self { image }
    }

    /// The glyph's pixels, white ink on black.
    pub fn image(&self) -> &Canvas {
        &self.image
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels. Equal to [`FontRasterMetrics::glyph_height`] for every glyph of a font.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Consumes the glyph, returning its pixels.
    pub fn into_image(self) -> Canvas {
        self.image
    }
}

/// Font-wide placement values shared by every glyph of a [`BitmapFont`].
///
/// `ascent` and `descent` are the font's defaults. Some glyphs exceed them,
/// which is why `glyph_height` is usually larger than `ascent + descent`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontRasterMetrics {
    /// Distance from the top of each glyph image to the baseline.
    pub baseline: u32,
    /// Default ascent above the baseline.
    pub ascent: u32,
    /// Default descent below the baseline.
    pub descent: u32,
    /// Height of every glyph image. Zero if no glyph could be rendered.
    pub glyph_height: u32,
}

/// A font rendered into one raster image per character code.
///
/// Glyphs are indexed by character code, starting at 0. Characters that
/// could not be rendered, such as control characters, are `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitmapFont {
    glyphs: Vec<Option<Glyph>>,
    metrics: FontRasterMetrics,
}

impl BitmapFont {
    /// Renders the first `char_count` character codes of `font`.
    ///
    /// Shorthand for [`BitmapFontBuilder`] with the given options.
    pub fn new<F: FontSource>(
        font: F,
        char_count: u32,
        width_policy: WidthPolicy,
    ) -> Result<Self, Error> {
        BitmapFontBuilder::new()
            .font(font)
            .char_count(char_count)
            .width_policy(width_policy)
            .build()
    }

    /// Renders the first 256 character codes of `font` using measured widths.
    pub fn from_font<F: FontSource>(font: F) -> Result<Self, Error> {
        BitmapFontBuilder::new().font(font).build()
    }

    /// All glyphs in character code order.
    pub fn glyphs(&self) -> &[Option<Glyph>] {
        &self.glyphs
    }

    /// The glyph for `code`, if it is in range and was rendered.
    pub fn glyph(&self, code: u32) -> Option<&Glyph> {
        let index = usize::try_from(code).ok()?;
        self.glyphs.get(index)?.as_ref()
    }

    /// Iterates over the rendered glyphs together with their character codes.
    pub fn present_glyphs(&self) -> impl Iterator<Item = (u32, &Glyph)> + '_ {
        (0_u32..)
            .zip(self.glyphs.iter())
            .filter_map(|(code, glyph)| glyph.as_ref().map(|glyph| (code, glyph)))
    }

    /// Number of character codes, rendered or not.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the font covers no character codes.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The font-wide metrics.
    pub fn metrics(&self) -> FontRasterMetrics {
        self.metrics
    }

    /// Distance from the top of each glyph image to the baseline.
    pub fn baseline(&self) -> u32 {
        self.metrics.baseline
    }

    /// The font's default ascent.
    pub fn ascent(&self) -> u32 {
        self.metrics.ascent
    }

    /// The font's default descent.
    pub fn descent(&self) -> u32 {
        self.metrics.descent
    }

    /// Height shared by every glyph image.
    pub fn glyph_height(&self) -> u32 {
        self.metrics.glyph_height
    }
}

/// Builds a [`BitmapFont`] from a [`FontSource`].
///
/// ```
/// use bitmap_font::{BitmapFontBuilder, ErrorKind, FontMetrics, FontSource, WidthPolicy};
/// # use bitmap_font::Canvas;
/// # use bitmap_font::image::Rgb;
/// # struct Blank;
/// # impl FontSource for Blank {
/// #     fn size(&self) -> u32 { 8 }
/// #     fn metrics(&self) -> FontMetrics { FontMetrics { ascent: 6, descent: 2, max_ascent: 7 } }
/// #     fn advance_width(&self, _: char) -> u32 { 0 }
/// #     fn draw_char(&mut self, _: &mut Canvas, _: char, _: i32, _: i32, _: Rgb<u8>) {}
/// # }
///
/// let font = BitmapFontBuilder::new()
///     .font(Blank)
///     .char_count(32)
///     .width_policy(WidthPolicy::InkScan)
///     .build()
///     .unwrap();
/// assert_eq!(font.len(), 32);
/// assert_eq!(font.baseline(), 7);
///
/// let err = BitmapFontBuilder::<Blank>::new().build().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Debug)]
pub struct BitmapFontBuilder<F> {
    font: Option<F>,
    options: BitmapFontOptions,
}

impl<F: FontSource> BitmapFontBuilder<F> {
    /// Creates a builder with no font and default options.
    pub fn new() -> Self {
        Self {
            font: None,
            options: BitmapFontOptions::default(),
        }
    }

    /// Sets the font to render.
    #[must_use]
    pub fn font(mut self, font: F) -> Self {
        self.font = Some(font);
        self
    }

    /// Replaces all options at once.
    #[must_use]
    pub fn options(mut self, options: BitmapFontOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the number of character codes to render.
    #[must_use]
    pub fn char_count(mut self, char_count: u32) -> Self {
        self.options.char_count = char_count;
        self
    }

    /// Sets how glyph widths are decided.
    #[must_use]
    pub fn width_policy(mut self, width_policy: WidthPolicy) -> Self {
        self.options.width_policy = width_policy;
        self
    }

    /// Renders every character code in `0..char_count`.
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// if no font was set, the character count is zero, or the font is
    /// degenerate. The rasterizer is released exactly once, whatever the
    /// outcome of the individual characters.
    pub fn build(self) -> Result<BitmapFont, Error> {
        let font = self
            .font
            .ok_or_else(|| Error::invalid_argument("no font source was provided"))?;
        let BitmapFontOptions {
            char_count,
            width_policy,
        } = self.options;
        if char_count == 0 {
            return Err(Error::invalid_argument(
                "char count must be greater than zero",
            ));
        }

        let mut rasterizer = GlyphRasterizer::new(font, width_policy)?;
        let mut metrics = FontRasterMetrics {
            baseline: rasterizer.baseline(),
            ascent: rasterizer.ascent(),
            descent: rasterizer.descent(),
            glyph_height: 0,
        };

        let glyphs = (0..char_count)
            .map(|code| rasterizer.render_glyph(code))
            .collect::<Result<Vec<_>, _>>();
        rasterizer.release()?;
        let glyphs = glyphs?;

        if let Some(first) = glyphs.iter().flatten().next() {
            metrics.glyph_height = first.height();
        }
        debug!(
            "baked {} of {char_count} glyphs, {}px high",
            glyphs.iter().flatten().count(),
            metrics.glyph_height
        );

        Ok(BitmapFont { glyphs, metrics })
    }
}

impl<F: FontSource> Default for BitmapFontBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}
