//! Label records and their delimited text form
//!
//! A record line looks like `EQ/BEB1/1000/0/EPL-AGT-EVLIM00001,Machine 001-001`:
//! five slash-separated fields, the last of which holds the code and an
//! optional display name separated by a comma.

mod filename;

pub use filename::{derive_filename, output_path};

use crate::constants::{FIELD_DELIMITER, NAME_DELIMITER, RECORD_FIELD_COUNT};
use crate::{Error, Result};

/// Record category taken from the first field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// `EQ` records
    Equipment,
    /// `FL` records
    FunctionalLocation,
    /// Any other prefix, kept verbatim
    Other(String),
}

impl Category {
    pub fn from_field(field: &str) -> Self {
        match field {
            "EQ" => Category::Equipment,
            "FL" => Category::FunctionalLocation,
            other => Category::Other(other.to_string()),
        }
    }

    /// The record prefix as it appears in the text
    pub fn as_str(&self) -> &str {
        match self {
            Category::Equipment => "EQ",
            Category::FunctionalLocation => "FL",
            Category::Other(s) => s,
        }
    }
}

/// A parsed record line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    raw: String,
    category: Category,
    fields: [String; RECORD_FIELD_COUNT],
    code: String,
    display_name: Option<String>,
}

impl Record {
    /// Parse a raw record line.
    ///
    /// The text before the first comma must split into exactly five
    /// slash-separated fields with a non-empty last field (the code).
    /// Everything after the first comma up to the next one is the display
    /// name; a missing or empty name is not an error.
    pub fn parse(raw: &str) -> Result<Self> {
        let (head, tail) = match raw.split_once(NAME_DELIMITER) {
            Some((head, tail)) => (head, Some(tail)),
            None => (raw, None),
        };

        let parts: Vec<&str> = head.split(FIELD_DELIMITER).collect();
        if parts.len() != RECORD_FIELD_COUNT {
            return Err(Error::malformed(
                raw,
                format!(
                    "expected {} '{}'-separated fields, found {}",
                    RECORD_FIELD_COUNT,
                    FIELD_DELIMITER,
                    parts.len()
                ),
            ));
        }

        let code = parts[RECORD_FIELD_COUNT - 1];
        if code.is_empty() {
            return Err(Error::malformed(raw, "empty code"));
        }

        let display_name = tail
            .and_then(|t| t.split(NAME_DELIMITER).next())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let mut fields: [String; RECORD_FIELD_COUNT] = Default::default();
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = part.to_string();
        }
        // Last field keeps its comma-delimited tail, as written
        if let Some(tail) = tail {
            let last = &mut fields[RECORD_FIELD_COUNT - 1];
            last.push(NAME_DELIMITER);
            last.push_str(tail);
        }

        Ok(Self {
            raw: raw.to_string(),
            category: Category::from_field(parts[0]),
            fields,
            code: code.to_string(),
            display_name,
        })
    }

    /// The line this record was parsed from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Positional field by index (0..5)
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Text encoded into the QR symbol: the record up to the first comma.
    pub fn payload(&self) -> &str {
        self.raw
            .split_once(NAME_DELIMITER)
            .map(|(head, _)| head)
            .unwrap_or(&self.raw)
    }
}

impl std::str::FromStr for Record {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Record::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let record = Record::parse("EQ/BEB1/1000/0/EPL-AGT-EVLIM00001,Machine 001-001").unwrap();

        assert_eq!(record.category(), &Category::Equipment);
        assert_eq!(record.field(1), Some("BEB1"));
        assert_eq!(record.field(2), Some("1000"));
        assert_eq!(record.field(3), Some("0"));
        assert_eq!(record.field(4), Some("EPL-AGT-EVLIM00001,Machine 001-001"));
        assert_eq!(record.code(), "EPL-AGT-EVLIM00001");
        assert_eq!(record.display_name(), Some("Machine 001-001"));
        assert_eq!(record.payload(), "EQ/BEB1/1000/0/EPL-AGT-EVLIM00001");
    }

    #[test]
    fn test_missing_display_name_is_not_an_error() {
        let record = Record::parse("FL/BEB1/1000/0/EPL-AGT").unwrap();
        assert_eq!(record.category(), &Category::FunctionalLocation);
        assert_eq!(record.display_name(), None);
        assert_eq!(record.payload(), "FL/BEB1/1000/0/EPL-AGT");

        let trailing_comma = Record::parse("FL/BEB1/1000/0/EPL-AGT,").unwrap();
        assert_eq!(trailing_comma.display_name(), None);
    }

    #[test]
    fn test_too_few_fields() {
        let err = Record::parse("EQ/BEB1/1000,Machine").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { ref raw, .. } if raw == "EQ/BEB1/1000,Machine"));
    }

    #[test]
    fn test_too_many_fields() {
        assert!(Record::parse("EQ/A/B/C/D/E,Name").is_err());
    }

    #[test]
    fn test_empty_code() {
        assert!(Record::parse("EQ/BEB1/1000/0/,Machine").is_err());
        assert!(Record::parse("").is_err());
    }

    #[test]
    fn test_display_name_may_contain_slashes() {
        let record = Record::parse("EQ/B/1/0/X,Line 1/2").unwrap();
        assert_eq!(record.display_name(), Some("Line 1/2"));
        assert_eq!(record.payload(), "EQ/B/1/0/X");
    }

    #[test]
    fn test_only_second_comma_subfield_is_the_name() {
        let record = Record::parse("EQ/B/1/0/X,Pump,spare").unwrap();
        assert_eq!(record.display_name(), Some("Pump"));
    }

    #[test]
    fn test_unicode_passes_through_unchanged() {
        let raw = "EQ/BEB1/1000/0/EPL-AGT-EVLIM00001,ทดสอบภาษาไทย สำเนา ล้ำ เย็น";
        let record: Record = raw.parse().unwrap();
        assert_eq!(record.display_name(), Some("ทดสอบภาษาไทย สำเนา ล้ำ เย็น"));
        assert_eq!(record.raw(), raw);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let record = Record::parse(" EQ/B/1/0/ X , Name ").unwrap();
        assert_eq!(record.category(), &Category::Other(" EQ".to_string()));
        assert_eq!(record.code(), " X ");
        assert_eq!(record.display_name(), Some(" Name "));
    }
}
