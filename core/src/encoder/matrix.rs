//! Symbol encoding: payload text to a module grid

use std::borrow::Cow;

use qrcode::{Color, QrCode, Version};

use super::hints::{EncodeHints, ErrorCorrection, HintKey};
use crate::{Error, Result};

/// Square grid of QR modules, `true` for dark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Modules per side
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }
}

/// Encode `payload` into a module grid, honouring the recognised hints.
pub fn encode_matrix(payload: &str, hints: &EncodeHints) -> Result<QrMatrix> {
    let data = payload_bytes(payload, hints.character_set())?;

    let level = match hints.get(&HintKey::ErrorCorrection) {
        Some(value) => value.parse::<ErrorCorrection>().map_err(Error::Encoding)?,
        None => ErrorCorrection::default(),
    };

    for (key, value) in hints.iter() {
        if let HintKey::Other(name) = key {
            tracing::debug!("ignoring encoder hint {}={}", name, value);
        }
    }

    let code = match hints.get(&HintKey::QrVersion) {
        Some(value) => {
            let version: i16 = value
                .trim()
                .parse()
                .ok()
                .filter(|v| (1..=40).contains(v))
                .ok_or_else(|| Error::Encoding(format!("invalid QR version: {value}")))?;
            QrCode::with_version(&data[..], Version::Normal(version), level.into())
        }
        None => QrCode::with_error_correction_level(&data[..], level.into()),
    }
    .map_err(|e| Error::Encoding(format!("{} ({} bytes)", e, data.len())))?;

    let modules = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();

    Ok(QrMatrix {
        width: code.width(),
        modules,
    })
}

/// Convert the payload into the bytes placed in the symbol.
fn payload_bytes<'a>(payload: &'a str, charset: Option<&str>) -> Result<Cow<'a, [u8]>> {
    let Some(charset) = charset else {
        return Ok(Cow::Borrowed(payload.as_bytes()));
    };

    match charset.trim().to_ascii_uppercase().replace('_', "-").as_str() {
        "UTF-8" | "UTF8" => Ok(Cow::Borrowed(payload.as_bytes())),
        "ISO-8859-1" | "ISO8859-1" | "LATIN1" => payload
            .chars()
            .map(|c| u8::try_from(u32::from(c)).ok())
            .collect::<Option<Vec<u8>>>()
            .map(Cow::Owned)
            .ok_or_else(|| Error::Encoding(format!("payload not representable in {charset}"))),
        "US-ASCII" | "ASCII" if payload.is_ascii() => Ok(Cow::Borrowed(payload.as_bytes())),
        "US-ASCII" | "ASCII" => Err(Error::Encoding(format!("payload not representable in {charset}"))),
        _ => Err(Error::Encoding(format!("unsupported character set: {charset}"))),
    }
}
