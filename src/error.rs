//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for rebuilding cube state from its textual rendering.
///
/// The core twist algebra is total over closed enumerations and has no error
/// path of its own; parsing is the one place a caller can hand us something
/// malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCubeError {
    /// the whole-cube string did not contain exactly six face strings
    #[error("expected 6 face strings, got {0}")]
    WrongFieldCount(usize),
    /// a face string did not contain exactly nine sticker codes
    #[error("expected 9 sticker codes in a face string, got {0}")]
    WrongFaceLength(usize),
    /// a sticker code was not one of the six colors or the blank marker
    #[error("unknown sticker code {0:?}")]
    UnknownSticker(char),
}
