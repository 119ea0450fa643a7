//! Encoder hints
//!
//! Hints are carried as an opaque key/value map. Only the keys the encoder
//! understands are interpreted; the rest ride along untouched.

use std::collections::BTreeMap;
use std::str::FromStr;

/// Hint keys understood by the encoder, plus an escape hatch for any other
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HintKey {
    /// Character set the payload is converted to before encoding
    CharacterSet,
    /// Error correction level (`L`, `M`, `Q` or `H`)
    ErrorCorrection,
    /// Quiet zone width in modules
    Margin,
    /// Fixed symbol version (1 to 40)
    QrVersion,
    /// Anything else; passed through, never interpreted
    Other(String),
}

/// QR error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// ~7% recovery
    #[default]
    L,
    /// ~15% recovery
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl ErrorCorrection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ErrorCorrection::L),
            "M" => Ok(ErrorCorrection::M),
            "Q" => Ok(ErrorCorrection::Q),
            "H" => Ok(ErrorCorrection::H),
            other => Err(format!("unknown error correction level: {other}")),
        }
    }
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

/// Ordered hint map handed to the encoder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeHints {
    entries: BTreeMap<HintKey, String>,
}

impl EncodeHints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a hint, replacing any previous value for the key
    pub fn insert(&mut self, key: HintKey, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    pub fn get(&self, key: &HintKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HintKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn character_set(&self) -> Option<&str> {
        self.get(&HintKey::CharacterSet)
    }

    pub fn set_character_set(&mut self, charset: impl Into<String>) {
        self.insert(HintKey::CharacterSet, charset);
    }

    pub fn set_error_correction(&mut self, level: ErrorCorrection) {
        self.insert(HintKey::ErrorCorrection, level.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_setters_land_in_map() {
        let mut hints = EncodeHints::new();
        hints.set_character_set("UTF-8");
        hints.set_error_correction(ErrorCorrection::H);

        assert_eq!(hints.get(&HintKey::CharacterSet), Some("UTF-8"));
        assert_eq!(hints.get(&HintKey::ErrorCorrection), Some("H"));
    }

    #[test]
    fn test_later_insert_wins() {
        let mut hints = EncodeHints::new();
        hints.set_error_correction(ErrorCorrection::H);
        hints.insert(HintKey::ErrorCorrection, "Q");
        assert_eq!(hints.get(&HintKey::ErrorCorrection), Some("Q"));
    }

    #[test]
    fn test_other_hints_are_kept() {
        let mut hints = EncodeHints::new();
        hints.insert(HintKey::Other("PDF417_COMPACT".into()), "true");
        assert_eq!(hints.iter().count(), 1);
        assert_eq!(hints.get(&HintKey::Other("PDF417_COMPACT".into())), Some("true"));
    }

    #[test]
    fn test_parse_error_correction() {
        assert_eq!("q".parse::<ErrorCorrection>().unwrap(), ErrorCorrection::Q);
        assert!("X".parse::<ErrorCorrection>().is_err());
    }
}
