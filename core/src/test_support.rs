//! Helpers shared by unit tests

use std::path::PathBuf;

use image::RgbImage;

/// Decode the first QR symbol found in `image`.
pub fn decode_qr(image: &RgbImage) -> Option<String> {
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| {
            let p = image.get_pixel(x as u32, y as u32);
            ((p[0] as u16 + p[1] as u16 + p[2] as u16) / 3) as u8
        },
    );
    let grids = prepared.detect_grids();
    let (_, content) = grids.first()?.decode().ok()?;
    Some(content)
}

/// A Latin font installed on the host, if any.
pub fn find_font() -> Option<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "/Library/Fonts/Arial Bold.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        "C:\\Windows\\Fonts\\arialbd.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.exists())
}
