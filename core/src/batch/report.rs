//! Batch outcome bookkeeping

use std::path::PathBuf;

use serde::Serialize;

use crate::{Error, ErrorKind};

/// A record that produced no label
#[derive(Debug, Clone, Serialize)]
pub struct RecordFailure {
    pub raw: String,
    pub kind: ErrorKind,
    pub message: String,
}

/// A label that was written but whose text overlay is incomplete
#[derive(Debug, Clone, Serialize)]
pub struct OverlayWarning {
    pub raw: String,
    pub path: PathBuf,
    pub message: String,
}

/// Summary of one batch run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Records that went through the pipeline (headers and blanks excluded)
    pub attempted: usize,
    pub produced: Vec<PathBuf>,
    pub failures: Vec<RecordFailure>,
    pub overlay_warnings: Vec<OverlayWarning>,
    /// Paths written more than once in this batch
    pub collisions: Vec<PathBuf>,
    pub headers_skipped: usize,
    pub cancelled: bool,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && !self.cancelled
    }

    pub(crate) fn record_failure(&mut self, raw: &str, error: &Error) {
        self.failures.push(RecordFailure {
            raw: raw.to_string(),
            kind: error.kind(),
            message: error.to_string(),
        });
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let mut report = BatchReport {
            attempted: 2,
            produced: vec![PathBuf::from("/out/1-0X-Y.png")],
            ..Default::default()
        };
        report.record_failure("EQ/B", &Error::malformed("EQ/B", "expected 5 fields, found 2"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["attempted"], 2);
        assert_eq!(json["failures"][0]["raw"], "EQ/B");
        assert_eq!(json["failures"][0]["kind"], "malformed_record");
        assert!(!report.is_clean());
    }
}
