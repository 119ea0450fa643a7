//! Output filename derivation

use std::path::{Path, PathBuf};

use super::Record;
use crate::constants::LABEL_EXTENSION;

/// Derive the label's base filename: `field2-field3code-name`.
///
/// The field order is part of the output naming contract. When the record has
/// no display name the trailing `-name` part is left off. Only the part of the
/// name before any path separator is used, so the label always lands directly
/// in the destination directory.
pub fn derive_filename(record: &Record) -> String {
    let mut name = format!(
        "{}-{}{}",
        record.field(2).unwrap_or_default(),
        record.field(3).unwrap_or_default(),
        record.code()
    );
    if let Some(display_name) = record.display_name() {
        let stem = display_name
            .split(std::path::is_separator)
            .next()
            .unwrap_or_default();
        name.push('-');
        name.push_str(stem);
    }
    name
}

/// Full output path for a record inside `destination`.
///
/// Always ends in `.png`, whatever image format the label is encoded with.
pub fn output_path(destination: &Path, record: &Record) -> PathBuf {
    destination.join(format!("{}.{}", derive_filename(record), LABEL_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_filename() {
        let record = Record::parse("EQ/BEB1/1000/0/EPL-AGT-EVLIM00001,Machine 001-001").unwrap();
        assert_eq!(derive_filename(&record), "1000-0EPL-AGT-EVLIM00001-Machine 001-001");
    }

    #[test]
    fn test_derive_filename_template() {
        for (f2, f3, code, name) in [("1", "2", "C", "N"), ("plant", "", "X-9", "Pump A"), ("", "7", "z", "ชื่อ")] {
            let record = Record::parse(&format!("FL/f1/{f2}/{f3}/{code},{name}")).unwrap();
            assert_eq!(derive_filename(&record), format!("{f2}-{f3}{code}-{name}"));
        }
    }

    #[test]
    fn test_derive_filename_without_name() {
        let record = Record::parse("EQ/B/1/0/X").unwrap();
        assert_eq!(derive_filename(&record), "1-0X");
    }

    #[test]
    fn test_name_stops_at_path_separator() {
        let record = Record::parse("EQ/B/1/0/X,Line 1/2").unwrap();
        assert_eq!(derive_filename(&record), "1-0X-Line 1");
        assert_eq!(record.display_name(), Some("Line 1/2"));

        let record = Record::parse("EQ/B/1/0/X,../../escaped").unwrap();
        assert_eq!(output_path(Path::new("/out"), &record), PathBuf::from("/out/1-0X-...png"));
    }

    #[test]
    fn test_output_path() {
        let record = Record::parse("EQ/BEB1/1000/0/EPL-AGT-EVLIM00001,Machine 001-001").unwrap();
        assert_eq!(
            output_path(Path::new("/out/"), &record),
            PathBuf::from("/out/1000-0EPL-AGT-EVLIM00001-Machine 001-001.png")
        );
        assert_eq!(
            output_path(Path::new("/out"), &record),
            PathBuf::from("/out/1000-0EPL-AGT-EVLIM00001-Machine 001-001.png")
        );
    }
}
