//! Reading and writing line-oriented text files.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bstr::ByteSlice;

use crate::line::Line;

/// Split raw bytes into numbered lines.
///
/// Lines end at `\n`; a trailing `\r` is dropped from each line and a final
/// newline does not produce an extra empty line. No decoding happens, so
/// input in any ASCII-compatible encoding is kept byte for byte.
pub fn split_lines(bytes: &[u8]) -> Vec<Line> {
    bytes
        .lines()
        .enumerate()
        .map(|(number, content)| Line::new(content, number))
        .collect()
}

/// Read a whole file into numbered lines
pub fn read_lines(path: &Path) -> Result<Vec<Line>> {
    let bytes = fs::read(path).with_context(|| format!("cannot read file {}", path.display()))?;
    Ok(split_lines(&bytes))
}

/// Write every line, each terminated by `\n`, to `writer`
pub fn write_lines_to<W: Write>(writer: W, lines: &[Line]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for line in lines {
        writer.write_all(line.content())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Create (or truncate) `path` and write every line to it
pub fn write_lines(path: &Path, lines: &[Line]) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("cannot create file {}", path.display()))?;
    write_lines_to(file, lines).with_context(|| format!("cannot write to file {}", path.display()))
}

/// `<input><suffix>`, e.g. `bundle.cpp` -> `bundle.cpp.converted.cpp`
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
