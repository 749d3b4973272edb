// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bitmap Font bakes a vector font into fixed-height raster glyphs and, optionally, into a
//! single horizontally packed glyph atlas.
//!
//! The pipeline has three stages:
//!
//! - [`GlyphRasterizer`] draws one character at a time into a reusable scratch canvas and
//!   crops the result to the glyph's width.
//! - [`BitmapFontBuilder`] drives a rasterizer over the character codes `0..char_count` and
//!   collects a [`BitmapFont`].
//! - [`AtlasBitmapFont`] packs the glyphs of a [`BitmapFont`] left to right into one image and
//!   records where each character landed.
//!
//! The vector font itself is supplied through the [`FontSource`] trait.
//!
//! ## Features
//!
//! - `swash` (enabled by default): Provides [`SwashFont`], a [`FontSource`] that rasterizes
//!   with Swash and reads metrics with Skrifa.
//! - `serde`: Implements `Serialize` and `Deserialize` for the configuration and layout types.
//!
//! ## Example
//!
//! ```no_run
//! # #[cfg(feature = "swash")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bitmap_font::{AtlasBitmapFont, BitmapFontBuilder, SwashFont, WidthPolicy};
//!
//! let data = std::fs::read("Roboto-Regular.ttf")?;
//! let font = SwashFont::new(data, 0, 16)?;
//! let bitmap_font = BitmapFontBuilder::new()
//!     .font(font)
//!     .char_count(128)
//!     .width_policy(WidthPolicy::Measured)
//!     .build()?;
//! let atlas = AtlasBitmapFont::pack(&bitmap_font);
//! assert_eq!(atlas.glyph_x().len(), 128);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "swash"))]
//! # fn main() {}
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use image;

mod atlas;
mod error;
mod font;
mod options;
mod rasterizer;
mod source;
#[cfg(feature = "swash")]
mod swash_source;
#[cfg(test)]
mod testing;

pub use atlas::{AtlasBitmapFont, AtlasLayout, AtlasRegion};
pub use error::{Error, ErrorKind};
pub use font::{BitmapFont, BitmapFontBuilder, FontRasterMetrics, Glyph};
pub use options::{BitmapFontOptions, WidthPolicy, DEFAULT_CHAR_COUNT};
pub use rasterizer::GlyphRasterizer;
pub use source::{Canvas, FontMetrics, FontSource, INK_COLOR};
#[cfg(feature = "swash")]
pub use swash_source::SwashFont;
