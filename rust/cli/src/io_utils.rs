//! File I/O helpers shared by the commands.
//!
//! - Reading one line of interactive input
//! - Reading hand histories with transparent `.zst` decompression
//! - Opening hand-history output, compressed when the path ends in `.zst`

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

/// Reads one line and trims it; `None` on EOF or read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use elemental_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("raise 40\n");
/// assert_eq!(read_stdin_line(&mut input), Some("raise 40".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a text file, decompressing it first when the path ends in `.zst`.
/// A leading UTF-8 BOM is stripped.
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

/// Creates (truncating) an output file for JSONL lines. Paths ending in
/// `.zst` get a zstd stream that finishes its frame when dropped.
pub fn create_output(path: &Path) -> std::io::Result<Box<dyn Write>> {
    ensure_parent_dir(path).map_err(std::io::Error::other)?;
    let file = BufWriter::new(File::create(path)?);
    if path.extension().is_some_and(|ext| ext == "zst") {
        let encoder = zstd::stream::write::Encoder::new(file, 0)?;
        Ok(Box::new(encoder.auto_finish()))
    } else {
        Ok(Box::new(file))
    }
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_with_whitespace() {
        let mut cursor = Cursor::new(b"  bet 30  \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("bet 30".to_string()));
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor), None);
    }

    #[test]
    fn test_strip_utf8_bom() {
        let mut s = "\u{feff}{}".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "{}");
    }

    #[test]
    fn compressed_output_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("hands.jsonl.zst");
        {
            let mut w = create_output(&path).unwrap();
            writeln!(w, "{{\"a\":1}}").unwrap();
            writeln!(w, "{{\"a\":2}}").unwrap();
        }
        let text = read_text_auto(&path.to_string_lossy()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("{\"a\":1}"));
    }

    #[test]
    fn plain_output_is_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hands.jsonl");
        {
            let mut w = create_output(&path).unwrap();
            writeln!(w, "line").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }
}
