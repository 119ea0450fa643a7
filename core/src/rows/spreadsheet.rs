//! Workbook rows assembled into record lines

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};

use super::RowSource;
use crate::{Error, Result};

/// Reads the first sheet of a workbook, one record line per row.
///
/// Cells are joined positionally: the first three are followed by `/`, the
/// fourth by `,`, the rest are appended as-is. A workbook whose filename marks
/// it as an equipment or functional-location list gets the matching category
/// prefix.
pub struct SpreadsheetRows {
    path: PathBuf,
}

impl SpreadsheetRows {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::Spreadsheet {
            path: self.path.clone(),
            message: message.into(),
        }
    }
}

impl RowSource for SpreadsheetRows {
    fn rows(&mut self) -> Result<Vec<String>> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| self.error(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| self.error("workbook has no sheets"))?
            .map_err(|e| self.error(e.to_string()))?;

        let prefix = category_prefix(&self.path);
        let rows: Vec<String> = range
            .rows()
            .filter_map(|cells| assemble_row(prefix, cells))
            .collect();

        tracing::debug!("read {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }
}

fn category_prefix(path: &Path) -> &'static str {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if name.contains("EQListfo") {
        "EQ/"
    } else if name.contains("FLListfo") {
        "FL/"
    } else {
        ""
    }
}

/// Join one row's cells into a record line; `None` for a blank row.
fn assemble_row(prefix: &str, cells: &[Data]) -> Option<String> {
    let used = cells.iter().rposition(|c| !matches!(c, Data::Empty))? + 1;

    let mut line = String::from(prefix);
    for (index, cell) in cells[..used].iter().enumerate() {
        line.push_str(&cell_text(cell));
        match index + 1 {
            1..=3 => line.push('/'),
            4 => line.push(','),
            _ => {}
        }
    }
    Some(line)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::DateTime(dt) => format_number(dt.as_f64()),
        _ => String::new(),
    }
}

/// Numeric cell text; whole numbers lose their `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn write_workbook(path: &Path, rows: &[&[Cell]]) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(s) => sheet.write_string(r as u32, c as u16, *s).map(|_| ()),
                    Cell::Number(n) => sheet.write_number(r as u32, c as u16, *n).map(|_| ()),
                    Cell::Blank => Ok(()),
                }
                .unwrap();
            }
        }
        workbook.save(path).unwrap();
    }

    enum Cell {
        Text(&'static str),
        Number(f64),
        Blank,
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1000.0), "1000");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn test_assemble_row_delimiters() {
        let cells = [
            Data::String("BEB1".into()),
            Data::Float(1000.0),
            Data::Float(0.0),
            Data::String("EPL-AGT-EVLIM00001".into()),
            Data::String("Machine 001-001".into()),
            Data::Empty,
        ];
        assert_eq!(
            assemble_row("EQ/", &cells).unwrap(),
            "EQ/BEB1/1000/0/EPL-AGT-EVLIM00001,Machine 001-001"
        );
        assert_eq!(assemble_row("", &[Data::Empty, Data::Empty]), None);
    }

    #[test]
    fn test_category_prefix_from_filename() {
        assert_eq!(category_prefix(Path::new("/d/EQListforGenerateQRCodeMPKS.xlsx")), "EQ/");
        assert_eq!(category_prefix(Path::new("FLListforPlant.xlsx")), "FL/");
        assert_eq!(category_prefix(Path::new("plant.xlsx")), "");
    }

    #[test]
    fn test_reads_first_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("EQListforGenerateQRCode.xlsx");
        write_workbook(
            &path,
            &[
                &[Cell::Text("Plant"), Cell::Text("Level"), Cell::Text("Sub"), Cell::Text("Code"), Cell::Text("Description")],
                &[Cell::Text("BEB1"), Cell::Number(1000.0), Cell::Number(0.0), Cell::Text("EPL-AGT-EVLIM00001"), Cell::Text("Machine 001-001")],
                &[Cell::Text("BEB1"), Cell::Number(1000.0), Cell::Number(0.0), Cell::Text("EPL-AGT-EVLIM00002"), Cell::Blank],
            ],
        );

        let rows = SpreadsheetRows::new(&path).rows().unwrap();
        assert_eq!(
            rows,
            vec![
                "EQ/Plant/Level/Sub/Code,Description",
                "EQ/BEB1/1000/0/EPL-AGT-EVLIM00001,Machine 001-001",
                "EQ/BEB1/1000/0/EPL-AGT-EVLIM00002,",
            ]
        );
    }

    #[test]
    fn test_missing_workbook() {
        let err = SpreadsheetRows::new("/nonexistent/EQListfo.xlsx").rows().unwrap_err();
        assert!(matches!(err, Error::Spreadsheet { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::Io);
    }
}
