// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Draws a compact preview of a range of glyphs with braille characters

use crate::{
    error::Result,
    glyph::{GLYPH_BYTES, GLYPH_WIDTH},
    rom::Rom,
};
use drawille::Canvas;
use std::ops::RangeInclusive;

/// Draws the glyphs in `range` side by side, one pixel apart
///
/// Each braille character covers 2x4 pixels, so a glyph takes up 4x2 characters.
pub fn preview(rom: &Rom, range: RangeInclusive<usize>) -> Result<String> {
    let glyphs = range
        .map(|index| rom.glyph(index))
        .collect::<Result<Vec<_>>>()?;
    let pitch = GLYPH_WIDTH + 1;
    let mut canvas = Canvas::new((glyphs.len() * pitch) as u32, GLYPH_BYTES as u32);
    for (slot, glyph) in glyphs.iter().enumerate() {
        for (y, row) in glyph.rows().enumerate() {
            row.pixels()
                .enumerate()
                .filter(|&(_, set)| set)
                .for_each(|(x, _)| canvas.set((slot * pitch + x) as u32, y as u32));
        }
    }
    Ok(trim_blank_lines(&canvas.frame()))
}

/// Drops the empty braille lines drawille leaves below the last row of dots
fn trim_blank_lines(frame: &str) -> String {
    let blank = |line: &&str| line.chars().all(|c| c == ' ' || c == '\u{2800}');
    let mut lines: Vec<&str> = frame.lines().collect();
    while lines.last().is_some_and(blank) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_glyph_fills_every_dot() -> Result<()> {
        let rom = Rom::new(vec![0xff; 8]);
        let frame = preview(&rom, 0..=0)?;
        assert_eq!(frame.chars().filter(|&c| c == '⣿').count(), 8);
        Ok(())
    }

    #[test]
    fn preview_is_two_lines_tall() -> Result<()> {
        let rom = Rom::new(vec![0xff; 8 * 3]);
        let frame = preview(&rom, 0..=2)?;
        assert_eq!(frame.lines().count(), 2);
        assert!(!frame.ends_with('\n'));
        Ok(())
    }

    #[test]
    fn trims_only_trailing_blanks() {
        assert_eq!(trim_blank_lines("⣿⣿\n  \n⣿\n \u{2800}\n"), "⣿⣿\n  \n⣿");
        assert_eq!(trim_blank_lines("   "), "");
    }

    #[test]
    fn out_of_range() {
        let rom = Rom::new(vec![0xff; 8]);
        assert!(preview(&rom, 0..=1).is_err());
    }
}
