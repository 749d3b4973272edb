// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Various helper functions to assert truths during testing.

use bitmap_font::{AtlasBitmapFont, BitmapFont};

/// Assert that `atlas` is a faithful packing of `font`.
pub(crate) fn assert_atlas_invariants(font: &BitmapFont, atlas: &AtlasBitmapFont) {
    let glyph_x = atlas.glyph_x();
    let glyph_width = atlas.glyph_width();
    assert_eq!(glyph_x.len(), font.len(), "glyph_x length mismatch");
    assert_eq!(glyph_width.len(), font.len(), "glyph_width length mismatch");

    let total: u32 = glyph_width.iter().sum();
    assert_eq!(
        total,
        atlas.image().width(),
        "widths do not add up to the atlas width"
    );
    assert_eq!(
        atlas.image().height(),
        font.glyph_height(),
        "atlas height mismatch"
    );

    for (i, glyph) in font.glyphs().iter().enumerate() {
        let expected = glyph.as_ref().map_or(0, |glyph| glyph.width());
        assert_eq!(glyph_width[i], expected, "width of code {i}");

        if glyph_width[i] == 0 {
            let next_x = glyph_width[i + 1..]
                .iter()
                .position(|&width| width > 0)
                .map_or(total, |offset| glyph_x[i + 1 + offset]);
            assert_eq!(
                glyph_x[i], next_x,
                "absent code {i} is not at the next glyph"
            );
        }
    }
}
