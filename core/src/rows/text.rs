//! Plain text record lists, one record per line

use std::path::PathBuf;

use super::RowSource;
use crate::{Error, Result};

pub struct TextLines {
    path: PathBuf,
}

impl TextLines {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for TextLines {
    fn rows(&mut self) -> Result<Vec<String>> {
        let content = std::fs::read(&self.path).map_err(|e| Error::io(&self.path, e))?;
        Ok(split_lines(&content)
            .enumerate()
            .map(|(index, line)| match std::str::from_utf8(line) {
                Ok(text) => text.to_string(),
                Err(_) => {
                    tracing::warn!("line {} of {} is not valid UTF-8", index + 1, self.path.display());
                    String::from_utf8_lossy(line).into_owned()
                }
            })
            .collect())
    }
}

/// Split on `\n`, dropping a trailing `\r` and the empty tail after a final newline.
fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    content
        .split(|b| *b == b'\n')
        .filter(move |_| !content.is_empty())
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fl-eq.txt");
        std::fs::write(&path, "EQ/B/1/0/X,ทดสอบ\r\n\nFL/B/2/0/Y,Z\n").unwrap();

        let rows = TextLines::new(&path).rows().unwrap();
        assert_eq!(rows, vec!["EQ/B/1/0/X,ทดสอบ", "", "FL/B/2/0/Y,Z"]);
    }

    #[test]
    fn test_invalid_utf8_only_affects_its_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fl-eq.txt");
        std::fs::write(&path, b"EQ/B/1/0/X,A\nEQ/B/2/0/Y,\xff\nFL/B/3/0/Z,C").unwrap();

        let rows = TextLines::new(&path).rows().unwrap();
        assert_eq!(rows, vec!["EQ/B/1/0/X,A", "EQ/B/2/0/Y,\u{FFFD}", "FL/B/3/0/Z,C"]);
    }

    #[test]
    fn test_empty_file_has_no_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();
        assert!(TextLines::new(&path).rows().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TextLines::new("/nonexistent/list.txt").rows().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Io);
    }
}
