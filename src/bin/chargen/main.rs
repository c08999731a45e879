// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Chargen: draws the glyphs of an 8x8 character ROM on the terminal

mod args;

use args::Arguments;
use chargen::prelude::*;
use std::process::exit;

fn main() {
    if let Err(e) = run(Arguments::parse()) {
        eprintln!("chargen: {e}");
        exit(1)
    }
}

fn run(options: Arguments) -> Result<()> {
    let rom = Rom::load(&options.file)?;
    println!("Read {} bytes from {}", rom.len(), options.file.display());

    let sheet = Sheet::new(&rom, options.range(), options.layout())?;
    print!("{sheet}");
    if options.braille {
        braille(&rom, &sheet)?;
    }
    Ok(())
}

#[cfg(feature = "drawille")]
fn braille(rom: &Rom, sheet: &Sheet) -> Result<()> {
    println!("\n{}", chargen::render::braille::preview(rom, sheet.range())?);
    Ok(())
}

#[cfg(not(feature = "drawille"))]
fn braille(_rom: &Rom, _sheet: &Sheet) -> Result<()> {
    eprintln!("chargen was built without the \"drawille\" feature; skipping braille preview");
    Ok(())
}
