//! Testing Chargen on ROMs loaded from disk
use chargen::prelude::*;
use std::{fs, path::PathBuf};

/// Writes `data` to a scratch file unique to `name`
fn scratch(name: &str, data: &[u8]) -> std::io::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("chargen-{}-{name}.rom", std::process::id()));
    fs::write(&path, data)?;
    Ok(path)
}

#[test]
fn load_reads_every_byte() -> Result<()> {
    let data: Vec<u8> = (0..=255).collect();
    let path = scratch("every-byte", &data).map_err(|source| Error::Io {
        path: "scratch".into(),
        source,
    })?;
    let rom = Rom::load(&path)?;
    fs::remove_file(&path).ok();
    assert_eq!(rom.len(), 256);
    assert_eq!(rom.glyph_count(), 32);
    assert_eq!(rom.as_bytes(), data.as_slice());
    assert_eq!(rom.glyph(31)?.bytes(), &[248, 249, 250, 251, 252, 253, 254, 255]);
    Ok(())
}

#[test]
fn load_then_draw() -> Result<()> {
    // The Commodore 64's '@'
    let at = [0x3c, 0x66, 0x6e, 0x6e, 0x60, 0x62, 0x3c, 0x00];
    let path = scratch("draw", &at).map_err(|source| Error::Io {
        path: "scratch".into(),
        source,
    })?;
    let rom = Rom::load(&path)?;
    fs::remove_file(&path).ok();
    let text = Sheet::new(&rom, 0..=0, Layout::default())?.to_string();
    let expected = "\
1 chars in total, 4 per line.
0x0000 3C 66 6E 6E 60 62 3C 00

charIdx = 0
00     █ █ █ █     
01   █ █     █ █   
02   █ █   █ █ █   
03   █ █   █ █ █   
04   █ █           
05   █ █       █   
06     █ █ █ █     
07                 
";
    assert_eq!(text, expected);
    Ok(())
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("chargen-this-file-does-not-exist.rom");
    match Rom::load(&path) {
        Err(Error::Io { path: missing, source }) => {
            assert_eq!(missing, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Error::Io, got {other:?}"),
    }
}
