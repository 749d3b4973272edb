// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `bitmap_font`.
//!
//! - The `util` module contains the synthetic fonts and assertions shared by the topic modules.
//!   Tests never read font files, so every glyph shape is known exactly.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests.
//! - For test naming, put the "topic" of the test at the start of the name, e.g.
//!   `atlas_absent_glyph_inherits_next_x` rather than `absent_glyph_x_in_atlas`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
