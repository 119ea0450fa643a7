//! Font discovery and glyph coverage

use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec};

use crate::{Error, Result};

/// Bold Latin faces tried for the category and payload lines
const PRIMARY_CANDIDATES: &[&str] = &[
    "Arial Bold.ttf",
    "arialbd.ttf",
    "DejaVuSans-Bold.ttf",
    "LiberationSans-Bold.ttf",
    "NotoSans-Bold.ttf",
    "FreeSansBold.ttf",
];

/// Faces with Thai coverage, tried for display names
const SCRIPT_CANDIDATES: &[&str] = &[
    "THSarabunNew Bold.ttf",
    "THSarabunNew-Bold.ttf",
    "NotoSansThai-Bold.ttf",
    "NotoSansThai-Regular.ttf",
    "Garuda-Bold.ttf",
    "Loma-Bold.ttf",
    "Garuda.ttf",
];

/// How deep to descend into font directories
const MAX_SEARCH_DEPTH: usize = 4;

fn search_roots() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    if let Some(user) = dirs::font_dir() {
        roots.push(user);
    }
    roots
}

/// Primary and script fonts used for the label text
#[derive(Default)]
pub struct FontSet {
    primary: Option<FontVec>,
    script: Option<FontVec>,
}

impl FontSet {
    /// Load fonts from explicit paths, falling back to system discovery.
    ///
    /// A font that cannot be found or parsed is logged and left out; the
    /// overlay decides later what that means for each line.
    pub fn load(primary: Option<&Path>, script: Option<&Path>) -> Self {
        let primary = resolve(primary, PRIMARY_CANDIDATES, "primary");
        let script = resolve(script, SCRIPT_CANDIDATES, "script");
        Self { primary, script }
    }

    pub fn new(primary: Option<FontVec>, script: Option<FontVec>) -> Self {
        Self { primary, script }
    }

    pub fn primary(&self) -> Option<&FontVec> {
        self.primary.as_ref()
    }

    pub fn script(&self) -> Option<&FontVec> {
        self.script.as_ref()
    }

    /// First font able to draw every visible character of `text`,
    /// preferring the script font.
    pub fn font_for(&self, text: &str) -> Option<&FontVec> {
        [self.script.as_ref(), self.primary.as_ref()]
            .into_iter()
            .flatten()
            .find(|font| covers(*font, text))
    }
}

/// Whether `font` has a glyph for every non-whitespace character.
pub fn covers<F: Font>(font: &F, text: &str) -> bool {
    text.chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .all(|c| font.glyph_id(c).0 != 0)
}

pub fn load_font(path: &Path) -> Result<FontVec> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    FontVec::try_from_vec(bytes)
        .map_err(|e| Error::Overlay(format!("invalid font {}: {}", path.display(), e)))
}

fn resolve(explicit: Option<&Path>, candidates: &[&str], role: &str) -> Option<FontVec> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let found = search_roots()
                .iter()
                .find_map(|root| find_candidate(root, candidates, MAX_SEARCH_DEPTH));
            match found {
                Some(path) => path,
                None => {
                    tracing::warn!("no {} font found on this system", role);
                    return None;
                }
            }
        }
    };

    match load_font(&path) {
        Ok(font) => {
            tracing::debug!("using {} font {}", role, path.display());
            Some(font)
        }
        Err(e) => {
            tracing::warn!("cannot load {} font: {}", role, e);
            None
        }
    }
}

/// Find the best-ranked candidate file under `dir`.
pub(crate) fn find_candidate(dir: &Path, candidates: &[&str], depth: usize) -> Option<PathBuf> {
    let mut files = Vec::new();
    collect_files(dir, depth, &mut files);

    candidates.iter().find_map(|name| {
        files
            .iter()
            .find(|path| path.file_name().is_some_and(|f| f.eq_ignore_ascii_case(name)))
            .cloned()
    })
}

fn collect_files(dir: &Path, depth: usize, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if depth > 0 {
                collect_files(&path, depth - 1, out);
            }
        } else {
            out.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::find_font;

    #[test]
    fn test_find_candidate_respects_rank() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        std::fs::write(dir.path().join("Garuda.ttf"), b"").unwrap();
        std::fs::write(dir.path().join("nested/deeper/garuda-bold.TTF"), b"").unwrap();

        let found = find_candidate(dir.path(), SCRIPT_CANDIDATES, 4).unwrap();
        assert_eq!(found.file_name().unwrap(), "garuda-bold.TTF");

        assert!(find_candidate(dir.path(), PRIMARY_CANDIDATES, 4).is_none());
        assert!(find_candidate(&dir.path().join("missing"), SCRIPT_CANDIDATES, 4).is_none());
    }

    #[test]
    fn test_invalid_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(matches!(load_font(&path), Err(Error::Overlay(_))));
        assert!(matches!(load_font(&dir.path().join("none.ttf")), Err(Error::Io { .. })));
    }

    #[test]
    fn test_empty_set_has_no_font_for_anything() {
        let fonts = FontSet::default();
        assert!(fonts.primary().is_none());
        assert!(fonts.font_for("EQ").is_none());
    }

    #[test]
    fn test_latin_coverage() {
        // Needs a real font on the host
        let Some(path) = find_font() else {
            return;
        };
        let font = load_font(&path).unwrap();
        assert!(covers(&font, "EQ/BEB1/1000/0/EPL-AGT-EVLIM00001"));
        assert!(covers(&font, "  "));
        assert!(!covers(&font, "\u{10FFFD}"));

        let fonts = FontSet::new(Some(font), None);
        assert!(fonts.font_for("Machine 001-001").is_some());
    }

    #[test]
    fn test_script_font_preferred_when_both_cover() {
        let Some(path) = find_font() else {
            return;
        };
        let fonts = FontSet::new(Some(load_font(&path).unwrap()), Some(load_font(&path).unwrap()));

        let chosen = fonts.font_for("Machine 001-001").unwrap();
        assert!(std::ptr::eq(chosen, fonts.script().unwrap()));
        assert!(!std::ptr::eq(chosen, fonts.primary().unwrap()));

        // Falls back to the primary face when only it is present
        let primary_only = FontSet::new(Some(load_font(&path).unwrap()), None);
        assert!(std::ptr::eq(
            primary_only.font_for("Machine 001-001").unwrap(),
            primary_only.primary().unwrap()
        ));
    }
}
