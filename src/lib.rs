// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE.txt for details)

//! This crate draws the glyphs of an 8x8 character ROM (like the Commodore 64's
//! chargen) as text, so you can check what's in a ROM dump without an emulator.
//!
//! A ROM is just a flat array of glyphs, eight bytes apiece. Nothing about the
//! format is checked, so any file can be viewed as a character ROM.

pub mod error;
pub mod glyph;
pub mod render;
pub mod rom;

/// Common imports for chargen
pub mod prelude {
    use super::*;
    pub use error::{Error, Result};
    pub use glyph::{Glyph, Row, GLYPH_BYTES, GLYPH_WIDTH};
    pub use render::{Layout, Sheet, DEFAULT_PER_LINE};
    pub use rom::Rom;
}
