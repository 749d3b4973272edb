// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error type for baking bitmap fonts.
///
/// Carries a non-exhaustive [`ErrorKind`] plus a short description of the
/// check that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// What exactly was wrong with the argument or state.
    message: &'static str,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// A human-readable description of the failed check.
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub(crate) fn invalid_argument(message: &'static str) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            message,
        }
    }

    pub(crate) fn invalid_state(message: &'static str) -> Self {
        Self {
            kind: ErrorKind::InvalidState,
            message,
        }
    }

    #[cfg(feature = "swash")]
    pub(crate) fn malformed_font(message: &'static str) -> Self {
        Self {
            kind: ErrorKind::MalformedFont,
            message,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let category = match self.kind {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::InvalidState => "invalid state",
            ErrorKind::MalformedFont => "malformed font",
        };
        write!(f, "{category}: {}", self.message)
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A caller-provided value was missing or out of range.
    ///
    /// Raised for a missing font source, a font reporting zero size or zero
    /// glyph height, and a character count of zero.
    InvalidArgument,

    /// The operation is not allowed in the current lifecycle state.
    ///
    /// Raised when a released [`GlyphRasterizer`](crate::GlyphRasterizer) is
    /// used or released a second time.
    InvalidState,

    /// Font data could not be parsed into a usable face.
    MalformedFont,
}
