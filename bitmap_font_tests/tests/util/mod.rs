// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;
mod block_font;

pub(crate) use asserts::assert_atlas_invariants;
pub(crate) use block_font::{letter_font, BlockFont};
