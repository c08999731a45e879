// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! A [Glyph] is an 8x8, 1 bit-per-pixel character bitmap
//!
//! Each byte is one row of pixels, top to bottom. Within a row, the most
//! significant bit is the leftmost pixel.

use owo_colors::{OwoColorize, Style};
use std::fmt::{Display, Formatter, Result};

/// Number of bytes (rows) in one glyph
pub const GLYPH_BYTES: usize = 8;
/// Number of pixels (columns) in one row
pub const GLYPH_WIDTH: usize = 8;

/// A view of one glyph, borrowed from a [Rom](crate::rom::Rom)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Glyph<'a> {
    index: usize,
    bytes: &'a [u8; GLYPH_BYTES],
}

impl<'a> Glyph<'a> {
    /// Wraps the eight bytes of glyph number `index`
    ///
    /// Only [Rom::glyph](crate::rom::Rom::glyph) makes these, so `index * 8` always fits.
    pub(crate) fn new(index: usize, bytes: &'a [u8; GLYPH_BYTES]) -> Self {
        Glyph { index, bytes }
    }
    /// The glyph's index within its ROM
    pub fn index(&self) -> usize {
        self.index
    }
    /// The byte offset of the glyph's first row within its ROM
    pub fn offset(&self) -> usize {
        self.index * GLYPH_BYTES
    }
    /// The raw bytes of the glyph, one per row
    pub fn bytes(&self) -> &'a [u8; GLYPH_BYTES] {
        self.bytes
    }
    /// Gets a single [Row] of the glyph, or [None] if `row` >= 8
    pub fn row(&self, row: usize) -> Option<Row> {
        self.bytes.get(row).copied().map(Row)
    }
    /// Iterates over the rows of the glyph, top to bottom
    pub fn rows(&self) -> Rows<'a> {
        Rows {
            bytes: self.bytes.iter(),
        }
    }
    /// Creates a one-line hex dump of the glyph which implements [Display]
    ///
    /// # Examples
    /// ```rust
    /// # use chargen::prelude::*;
    /// # fn main() -> Result<()> {
    /// let mut data = vec![0; 16];
    /// data.extend([0x3c, 0x66, 0x6e, 0x6e, 0x60, 0x62, 0x3c, 0x00]);
    /// let rom = Rom::new(data);
    /// assert_eq!(rom.glyph(2)?.hex_dump().to_string(), "0x0010 3C 66 6E 6E 60 62 3C 00");
    /// # Ok(())
    /// # }
    /// ```
    pub fn hex_dump(&self) -> HexDump<'a> {
        HexDump { glyph: *self }
    }
}

/// One row of pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Row(pub u8);

impl Row {
    /// Tests the pixel in column `column`, counting from the left
    pub fn is_set(&self, column: usize) -> bool {
        column < GLYPH_WIDTH && self.0 & (0x80 >> column) != 0
    }
    /// Iterates over the pixels of the row, left to right
    pub fn pixels(&self) -> Pixels {
        Pixels {
            row: self.0,
            front: 0,
            back: GLYPH_WIDTH,
        }
    }
}

/// Iterator over the [Row]s of a [Glyph]
#[derive(Clone, Debug)]
pub struct Rows<'a> {
    bytes: std::slice::Iter<'a, u8>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.bytes.next().copied().map(Row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl DoubleEndedIterator for Rows<'_> {
    fn next_back(&mut self) -> Option<Row> {
        self.bytes.next_back().copied().map(Row)
    }
}

/// Iterator over the pixels of a [Row]; `true` means the pixel is set
#[derive(Clone, Debug)]
pub struct Pixels {
    row: u8,
    front: usize,
    back: usize,
}

impl Iterator for Pixels {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let pixel = Row(self.row).is_set(self.front);
        self.front += 1;
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Pixels {}

impl DoubleEndedIterator for Pixels {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Row(self.row).is_set(self.back))
    }
}

/// A single-line hex dump of a [Glyph]: its offset, then its bytes
#[derive(Clone, Copy, Debug)]
pub struct HexDump<'a> {
    glyph: Glyph<'a>,
}

impl HexDump<'_> {
    /// Formats the dump, styling the offset with `style` if there is one
    pub(crate) fn fmt_styled(&self, f: &mut Formatter<'_>, style: Option<Style>) -> Result {
        let offset = format!("0x{:04X}", self.glyph.offset());
        match style {
            Some(style) => write!(f, "{}", offset.style(style))?,
            None => write!(f, "{offset}")?,
        }
        for byte in self.glyph.bytes() {
            write!(f, " {byte:02X}")?;
        }
        Ok(())
    }
}

impl Display for HexDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.fmt_styled(f, None)
    }
}
