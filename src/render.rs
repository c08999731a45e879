// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Renders a range of glyphs as text, several glyphs side by side
//!
//! A [Sheet] prints a summary line, a hex dump when only one glyph was asked
//! for, then one block per batch of [Layout::per_line] glyphs:
//! ```text
//! 1 chars in total, 4 per line.
//! 0x0008 18 3C 66 7E 66 66 66 00
//!
//! charIdx = 1
//! 00       █ █
//! 01     █ █ █ █
//! ```

#[cfg(feature = "drawille")]
pub mod braille;

use crate::{
    error::{Error, Result},
    glyph::{Glyph, GLYPH_BYTES},
    rom::Rom,
};
use owo_colors::{OwoColorize, Style};
use std::{
    fmt::{self, Display, Formatter},
    ops::RangeInclusive,
};

/// Number of glyphs drawn side by side, unless told otherwise
pub const DEFAULT_PER_LINE: usize = 4;

/// Controls how a [Sheet] draws its glyphs
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Layout {
    /// Number of glyphs drawn side by side in each batch
    pub per_line: usize,
    /// Drawn for each set pixel
    pub fill: char,
    /// Drawn for each clear pixel
    pub blank: char,
    /// Style headers and offsets with terminal colors
    pub color: bool,
}

impl Layout {
    /// Sets the number of glyphs drawn side by side
    pub fn per_line(mut self, per_line: usize) -> Self {
        self.per_line = per_line;
        self
    }
    /// Draws set pixels with `#` instead of a full block
    pub fn ascii(mut self, ascii: bool) -> Self {
        self.fill = if ascii { '#' } else { '█' };
        self
    }
    /// Enables or disables terminal colors
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
    /// Green phosphor style formatting, for taste
    fn style(&self) -> Option<Style> {
        self.color.then(|| Style::new().bold().green().on_black())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            per_line: DEFAULT_PER_LINE,
            fill: '█',
            blank: ' ',
            color: false,
        }
    }
}

/// An inclusive range of glyphs in a [Rom], ready to be displayed
///
/// # Examples
/// ```rust
/// # use chargen::prelude::*;
/// # fn main() -> Result<()> {
/// let rom = Rom::new([0xffu8; 64]);
/// let sheet = Sheet::new(&rom, 0..=5, Layout::default())?;
/// assert_eq!(sheet.batches().count(), 2);
/// print!("{sheet}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Sheet<'a> {
    rom: &'a Rom,
    start: usize,
    end: usize,
    layout: Layout,
}

impl<'a> Sheet<'a> {
    /// Checks that every glyph in `range` exists in `rom`, and constructs a [Sheet]
    ///
    /// Nothing is drawn for a range that fails these checks:
    /// - [Error::ZeroPerLine] if `layout.per_line` is 0
    /// - [Error::InvertedRange] if the range ends before it starts
    /// - [Error::GlyphOutOfRange] if the range runs off the end of the ROM
    pub fn new(rom: &'a Rom, range: RangeInclusive<usize>, layout: Layout) -> Result<Self> {
        let (start, end) = range.into_inner();
        if layout.per_line == 0 {
            return Err(Error::ZeroPerLine);
        }
        if end < start {
            return Err(Error::InvertedRange { start, end });
        }
        // Glyphs are contiguous, so if the last one fits, they all do
        rom.glyph(end)?;
        Ok(Sheet {
            rom,
            start,
            end,
            layout,
        })
    }
    /// The indices of every glyph on the sheet
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
    /// The [Layout] this sheet is drawn with
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
    /// The number of glyphs on the sheet. Always at least one.
    pub fn count(&self) -> usize {
        self.end - self.start + 1
    }
    /// Splits the sheet into batches of at most [Layout::per_line] glyphs
    ///
    /// Every batch but the last is full.
    pub fn batches(&self) -> impl Iterator<Item = RangeInclusive<usize>> + 'a {
        let (end, per_line) = (self.end, self.layout.per_line);
        (self.start..=self.end)
            .step_by(per_line)
            .map(move |first| first..=first.saturating_add(per_line - 1).min(end))
    }

    fn glyph(&self, index: usize) -> std::result::Result<Glyph<'a>, fmt::Error> {
        // The whole range was checked in Sheet::new
        self.rom.glyph(index).map_err(|_| fmt::Error)
    }

    fn fmt_batch(&self, f: &mut Formatter<'_>, batch: RangeInclusive<usize>) -> fmt::Result {
        let style = self.layout.style();
        let header = format!("charIdx = {}", batch.start());
        match style {
            Some(style) => writeln!(f, "\n{}", header.style(style))?,
            None => writeln!(f, "\n{header}")?,
        }
        let glyphs = batch
            .map(|index| self.glyph(index))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        for row in 0..GLYPH_BYTES {
            let number = format!("{row:02}");
            match style {
                Some(style) => write!(f, "{}", number.style(style))?,
                None => write!(f, "{number}")?,
            }
            for glyph in &glyphs {
                write!(f, " ")?;
                let Some(row) = glyph.row(row) else {
                    return Err(fmt::Error);
                };
                for pixel in row.pixels() {
                    let cell = if pixel {
                        self.layout.fill
                    } else {
                        self.layout.blank
                    };
                    write!(f, "{cell} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for Sheet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} chars in total, {} per line.",
            self.count(),
            self.layout.per_line
        )?;
        if self.start == self.end {
            self.glyph(self.start)?
                .hex_dump()
                .fmt_styled(f, self.layout.style())?;
            writeln!(f)?;
        }
        for batch in self.batches() {
            self.fmt_batch(f, batch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rom: &Rom, range: RangeInclusive<usize>, per_line: usize) -> Result<Sheet<'_>> {
        Sheet::new(rom, range, Layout::default().per_line(per_line))
    }

    #[test]
    fn batches_hold_the_remainder() -> Result<()> {
        let rom = Rom::new(vec![0; 8 * 16]);
        let batches: Vec<_> = sheet(&rom, 3..=12, 4)?.batches().collect();
        assert_eq!(batches, [3..=6, 7..=10, 11..=12]);
        Ok(())
    }

    #[test]
    fn batches_divide_evenly() -> Result<()> {
        let rom = Rom::new(vec![0; 8 * 16]);
        let batches: Vec<_> = sheet(&rom, 0..=7, 4)?.batches().collect();
        assert_eq!(batches, [0..=3, 4..=7]);
        Ok(())
    }

    #[test]
    fn huge_per_line_is_one_batch() -> Result<()> {
        let rom = Rom::new(vec![0; 8 * 16]);
        let batches: Vec<_> = sheet(&rom, 2..=15, usize::MAX)?.batches().collect();
        assert_eq!(batches, [2..=15]);
        Ok(())
    }

    #[test]
    fn zero_per_line() {
        let rom = Rom::new(vec![0; 8]);
        assert!(matches!(sheet(&rom, 0..=0, 0), Err(Error::ZeroPerLine)));
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn inverted_range() {
        let rom = Rom::new(vec![0; 32]);
        assert!(matches!(
            sheet(&rom, 3..=1, 4),
            Err(Error::InvertedRange { start: 3, end: 1 })
        ));
    }

    #[test]
    fn end_past_rom() {
        let rom = Rom::new(vec![0; 32]);
        assert!(matches!(
            sheet(&rom, 2..=4, 4),
            Err(Error::GlyphOutOfRange { index: 4, .. })
        ));
    }

    #[test]
    fn ascii_fill() -> Result<()> {
        let rom = Rom::new([0x80, 0, 0, 0, 0, 0, 0, 0]);
        let text = Sheet::new(&rom, 0..=0, Layout::default().ascii(true))?.to_string();
        assert!(text.contains("\n00 #               \n"));
        Ok(())
    }

    #[test]
    fn colored_output_still_holds_the_dump() -> Result<()> {
        let rom = Rom::new([0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0]);
        let text = Sheet::new(&rom, 0..=0, Layout::default().color(true))?.to_string();
        assert!(text.contains("\x1b["));
        assert!(text.contains("0x0000"));
        assert!(text.contains(" 12 34 56 78 9A BC DE F0\n"));
        Ok(())
    }
}
