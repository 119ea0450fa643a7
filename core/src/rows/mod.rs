//! Row sources for batch mode
//!
//! A row source turns an input file into ordered raw record lines. Header
//! filtering and parsing happen later, in the batch driver.

mod spreadsheet;
mod text;

pub use spreadsheet::SpreadsheetRows;
pub use text::TextLines;

use std::path::Path;

use crate::constants::SPREADSHEET_EXTENSIONS;
use crate::Result;

/// Something that yields raw record lines in input order
pub trait RowSource {
    fn rows(&mut self) -> Result<Vec<String>>;
}

impl RowSource for Vec<String> {
    fn rows(&mut self) -> Result<Vec<String>> {
        Ok(std::mem::take(self))
    }
}

/// Pick a row source for `path` from its extension.
pub fn open(path: &Path) -> Box<dyn RowSource> {
    let is_spreadsheet = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SPREADSHEET_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)));

    if is_spreadsheet {
        Box::new(SpreadsheetRows::new(path))
    } else {
        Box::new(TextLines::new(path))
    }
}
