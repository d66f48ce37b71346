//! A library which models the sticker-level state of a 3x3x3 twisty cube and
//! brute-force searches for a twist sequence connecting two cube states. This
//! is mostly for personal use.

#![deny(missing_docs)]

pub mod cube;
pub mod error;
pub mod geometry;
pub mod moves;
pub mod piece;
pub mod router;
