// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The [Rom] holds a character ROM image in memory
//!
//! Glyphs are never copied out of the ROM; [Rom::glyph] hands out a [Glyph] that
//! borrows its eight bytes.

use crate::{
    error::{Error, Result},
    glyph::{Glyph, GLYPH_BYTES},
};
use std::{
    fmt::{Debug, Display, Formatter},
    path::Path,
    slice::SliceIndex,
};

/// An immutable character ROM image
///
/// # Examples
/// ```rust
/// # use chargen::prelude::*;
/// let rom = Rom::new([0x18, 0x3c, 0x66, 0x7e, 0x66, 0x66, 0x66, 0x00]);
/// assert_eq!(rom.len(), 8);
/// assert_eq!(rom.glyph_count(), 1);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rom {
    data: Vec<u8>,
}

impl Rom {
    /// Constructs a [Rom] from bytes already in memory
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Rom { data: data.into() }
    }

    /// Reads the whole file at `path` into a new [Rom]
    ///
    /// If the file can't be read, returns [Err]\([Error::Io]) naming the path
    /// ```rust
    /// # use chargen::prelude::*;
    /// assert!(Rom::load("this/path/does/not/exist.bin").is_err());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(data) => Ok(Rom { data }),
            Err(source) => Err(Error::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Returns the number of bytes in the [Rom]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the [Rom] holds no bytes at all
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets the raw contents of the [Rom]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Gets a slice of the [Rom], or [None] if `index` is out of bounds
    pub fn grab<I>(&self, index: I) -> Option<&<I as SliceIndex<[u8]>>::Output>
    where
        I: SliceIndex<[u8]>,
    {
        self.data.get(index)
    }

    /// Returns the number of whole glyphs in the [Rom]
    ///
    /// Trailing bytes which don't fill a glyph are not counted.
    pub fn glyph_count(&self) -> usize {
        self.data.len() / GLYPH_BYTES
    }

    /// Gets the [Glyph] at `index`, which lives at byte offset `index * 8`
    ///
    /// # Examples
    /// ```rust
    /// # use chargen::prelude::*;
    /// # fn main() -> Result<()> {
    /// let rom = Rom::new([0u8; 16]);
    /// assert_eq!(rom.glyph(1)?.offset(), 8);
    /// assert!(rom.glyph(2).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn glyph(&self, index: usize) -> Result<Glyph<'_>> {
        let bytes = index
            .checked_mul(GLYPH_BYTES)
            .and_then(|offset| self.grab(offset..offset.checked_add(GLYPH_BYTES)?))
            .and_then(|bytes| <&[u8; GLYPH_BYTES]>::try_from(bytes).ok())
            .ok_or(Error::GlyphOutOfRange {
                index,
                glyphs: self.glyph_count(),
                len: self.len(),
            })?;
        Ok(Glyph::new(index, bytes))
    }
}

impl From<Vec<u8>> for Rom {
    fn from(data: Vec<u8>) -> Self {
        Rom { data }
    }
}

impl AsRef<[u8]> for Rom {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Debug for Rom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rom")
            .field("len", &self.len())
            .field("glyphs", &self.glyph_count())
            .finish()
    }
}

impl Display for Rom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes ({} glyphs)", self.len(), self.glyph_count())
    }
}
