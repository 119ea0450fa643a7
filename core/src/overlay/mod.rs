//! Label text overlay
//!
//! Draws the record's category, payload and display name onto an image that
//! was already written, then rewrites the file in its original format.

mod fonts;
mod layout;

pub use fonts::{covers, load_font, FontSet};
pub use layout::{Layout, TextSlot};

use std::path::Path;

use ab_glyph::{Font, PxScale, ScaleFont};
use image::{ImageReader, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

use crate::record::Record;
use crate::{Error, Result};

const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// What happened to the display name line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNameOutcome {
    Rendered,
    /// The record has no display name
    Absent,
    /// No loaded font covers the name's characters
    Unsupported,
}

/// Draw the label text for `record` onto the image at `path`, in place.
///
/// Fails when the image cannot be read or rewritten, or when no primary font
/// is available. A display name that cannot be drawn is reported through the
/// returned outcome instead.
pub fn overlay(path: &Path, record: &Record, fonts: &FontSet) -> Result<DisplayNameOutcome> {
    let reader = ImageReader::open(path)
        .map_err(|e| Error::io(path, e))?
        .with_guessed_format()
        .map_err(|e| Error::io(path, e))?;
    let format = reader
        .format()
        .ok_or_else(|| Error::Overlay(format!("unrecognised image format: {}", path.display())))?;
    let mut canvas = reader.decode().map_err(|e| Error::image(path, e))?.to_rgb8();

    let primary = fonts
        .primary()
        .ok_or_else(|| Error::Overlay("no primary font available".to_string()))?;

    let layout = Layout::for_canvas(canvas.width(), canvas.height());
    draw_line(&mut canvas, primary, layout.category, record.category().as_str());
    draw_line(&mut canvas, primary, layout.payload, record.payload());

    let outcome = match record.display_name() {
        None => DisplayNameOutcome::Absent,
        Some(name) => match fonts.font_for(name) {
            Some(font) => {
                draw_line(&mut canvas, font, layout.display_name, name);
                DisplayNameOutcome::Rendered
            }
            None => DisplayNameOutcome::Unsupported,
        },
    };

    canvas
        .save_with_format(path, format)
        .map_err(|e| Error::image(path, e))?;

    Ok(outcome)
}

/// Draw `text` with its baseline on the slot's baseline.
fn draw_line<F: Font>(canvas: &mut RgbImage, font: &F, slot: TextSlot, text: &str) {
    let scale = PxScale::from(slot.size);
    let ascent = font.as_scaled(scale).ascent();
    let top = slot.baseline - ascent.round() as i32;
    draw_text_mut(canvas, TEXT_COLOR, slot.x, top, scale, font, text);
}
