// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Parses arguments into a struct

use chargen::render::{Layout, DEFAULT_PER_LINE};
use gumdrop::Options;
use std::{ops::RangeInclusive, path::PathBuf, process::exit};

/// Positional arguments, for the usage line
const FREE: &str = "<rom filename> <character start index> [character end index] [chars per line]";

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Options, Hash)]
pub struct Arguments {
    #[options(help = "Print this help message.")]
    help: bool,
    #[options(help = "Character ROM to view.", free, required)]
    pub file: PathBuf,
    #[options(help = "Index of the first character to draw.", free, required)]
    pub start: usize,
    #[options(help = "Index of the last character to draw (default: start).", free)]
    pub end: Option<usize>,
    #[options(help = "Characters drawn side by side (default: 4).", free)]
    pub per_line: Option<usize>,
    #[options(help = "Draw set pixels with '#' instead of a block.")]
    pub ascii: bool,
    #[options(help = "Color the headers and offsets.")]
    pub color: bool,
    #[options(help = "Also draw a compact braille preview.")]
    pub braille: bool,
}

impl Arguments {
    /// Parses the process arguments, or prints usage and exits
    pub fn parse() -> Arguments {
        let args: Vec<String> = std::env::args().collect();
        let program = args.first().map(String::as_str).unwrap_or("chargen");
        match Arguments::parse_args_default(args.get(1..).unwrap_or_default()) {
            Ok(options) if options.help_requested() => {
                println!("{}", Arguments::usage_for(program));
                exit(0)
            }
            Ok(options) => options,
            Err(e) => {
                eprintln!("{program}: {e}");
                eprintln!("{}", Arguments::usage_for(program));
                exit(-1)
            }
        }
    }

    /// The full usage text, positionals first, then every option
    pub fn usage_for(program: &str) -> String {
        format!(
            "usage: {program} [OPTIONS] {FREE}\n\n{}",
            Arguments::usage()
        )
    }

    /// The inclusive range of characters to draw
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end.unwrap_or(self.start)
    }

    /// How the characters should be drawn
    pub fn layout(&self) -> Layout {
        Layout::default()
            .per_line(self.per_line.unwrap_or(DEFAULT_PER_LINE))
            .ascii(self.ascii)
            .color(self.color)
    }
}
