// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Error type for Chargen

use std::path::PathBuf;
use thiserror::Error;

/// Result type, equivalent to [std::result::Result]<T, [enum@Error]>
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Chargen.
#[derive(Debug, Error)]
pub enum Error {
    /// The ROM file could not be read
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// The file we tried to read
        path: PathBuf,
        /// Error originated in [std::io]
        #[source]
        source: std::io::Error,
    },
    /// Tried to view a glyph that doesn't fit inside the ROM
    #[error("glyph {index} is out of range (ROM holds {glyphs} glyphs in {len} bytes)")]
    GlyphOutOfRange {
        /// The offending glyph index
        index: usize,
        /// The number of whole glyphs in the ROM
        glyphs: usize,
        /// The length of the ROM, in bytes
        len: usize,
    },
    /// The end of the range comes before its start
    #[error("end index {end} precedes start index {start}")]
    InvertedRange {
        /// The first glyph index requested
        start: usize,
        /// The last glyph index requested
        end: usize,
    },
    /// Can't lay out zero glyphs on a line
    #[error("glyphs per line must be at least 1")]
    ZeroPerLine,
}
