// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for baking a bitmap font.

/// Number of character codes baked when no count is given.
pub const DEFAULT_CHAR_COUNT: u32 = 256;

/// How the width of a rasterized glyph is decided.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WidthPolicy {
    /// Use the advance width reported by the font.
    ///
    /// The ink scan is only consulted when the advance is zero. A character with
    /// neither advance nor ink is not renderable.
    #[default]
    Measured,
    /// Use the ink scan exclusively.
    ///
    /// The width is the rightmost ink column plus the leftmost ink column
    /// (each counted one past the column index), clamped to the canvas width.
    InkScan,
}

/// Options for [`BitmapFontBuilder`](crate::BitmapFontBuilder).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BitmapFontOptions {
    /// Number of character codes to bake, starting at code 0. Must be non-zero.
    pub char_count: u32,
    /// How glyph widths are decided.
    pub width_policy: WidthPolicy,
}

impl BitmapFontOptions {
    /// Creates options for the first 256 character codes with measured widths.
    pub const fn new() -> Self {
        Self {
            char_count: DEFAULT_CHAR_COUNT,
            width_policy: WidthPolicy::Measured,
        }
    }

    /// Sets the number of character codes to bake.
    #[must_use]
    pub const fn with_char_count(mut self, char_count: u32) -> Self {
        self.char_count = char_count;
        self
    }

    /// Sets the width policy.
    #[must_use]
    pub const fn with_width_policy(mut self, width_policy: WidthPolicy) -> Self {
        self.width_policy = width_policy;
        self
    }
}

impl Default for BitmapFontOptions {
    fn default() -> Self {
        Self::new()
    }
}
