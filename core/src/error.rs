use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Qrlabel error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed record \"{raw}\": {reason}")]
    MalformedRecord { raw: String, reason: String },

    #[error("QR encoding failed: {0}")]
    Encoding(String),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image error on {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read spreadsheet {}: {message}", .path.display())]
    Spreadsheet { path: PathBuf, message: String },

    #[error("Overlay failed: {0}")]
    Overlay(String),
}

/// Coarse error classes reported in logs and batch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedRecord,
    Encoding,
    Io,
    Overlay,
}

impl Error {
    pub fn malformed(raw: &str, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        // The image crate wraps plain IO failures; keep them in the IO class
        match source {
            image::ImageError::IoError(source) => Error::io(path, source),
            source => Error::Image {
                path: path.into(),
                source,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            Error::Encoding(_) => ErrorKind::Encoding,
            Error::Io { .. } | Error::Image { .. } | Error::Spreadsheet { .. } => ErrorKind::Io,
            Error::Overlay(_) => ErrorKind::Overlay,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::MalformedRecord => "malformed-record",
            ErrorKind::Encoding => "encoding",
            ErrorKind::Io => "io",
            ErrorKind::Overlay => "overlay",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
