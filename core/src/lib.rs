//! Qrlabel Core - QR label generation library
//!
//! This library turns delimited equipment and location records into QR code
//! label images with human-readable text drawn on them, one image per record,
//! either for a single record or for every row of a spreadsheet.

pub mod batch;
pub mod constants;
pub mod encoder;
pub mod overlay;
pub mod record;
pub mod rows;

mod error;

#[cfg(test)]
mod test_support;

pub use error::{Error, ErrorKind, Result};

use std::path::PathBuf;

use encoder::{EncodeRequest, ErrorCorrection, ImageFormat};

/// Configuration for label generation
#[derive(Debug, Clone)]
pub struct LabelConfig {
    /// Label canvas edge in pixels
    pub size: u32,
    /// Image format the label is encoded in
    pub format: ImageFormat,
    /// Error correction level; the encoder default when unset
    pub error_correction: Option<ErrorCorrection>,
    /// Character set for the payload; UTF-8 when unset
    pub charset: Option<String>,
    /// Font for the category and payload lines
    pub primary_font: Option<PathBuf>,
    /// Font for display names in non-Latin scripts
    pub script_font: Option<PathBuf>,
    /// Rows containing this text are treated as headers in batch mode
    pub header_marker: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            size: constants::LABEL_SIZE,
            format: ImageFormat::Png,
            error_correction: None,
            charset: None,
            primary_font: None,
            script_font: None,
            header_marker: constants::HEADER_MARKER.to_string(),
        }
    }
}

impl LabelConfig {
    /// Build the encode request for one record payload
    pub fn encode_request(&self, payload: &str) -> EncodeRequest {
        let mut request = EncodeRequest::new(payload)
            .with_size(self.size, self.size)
            .with_format(self.format);
        if let Some(level) = self.error_correction {
            request = request.with_error_correction(level);
        }
        if let Some(charset) = &self.charset {
            request = request.with_charset(charset.clone());
        }
        request
    }
}

// Re-export key types for convenience
pub use batch::{BatchEvent, BatchReport, CancelFlag, Labeler};
pub use encoder::{encode, RasterImage};
pub use record::Record;
