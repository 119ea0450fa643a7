//! QR encoding and rasterization
//!
//! [`encode`] turns an [`EncodeRequest`] into an in-memory [`RasterImage`];
//! writing it to disk is a separate step so encoding failures and IO
//! failures stay distinct.

mod hints;
mod matrix;

pub use hints::{EncodeHints, ErrorCorrection, HintKey};
pub use matrix::{encode_matrix, QrMatrix};

use std::io::{Cursor, Seek, Write};
use std::path::Path;
use std::str::FromStr;

use image::{Rgb, RgbImage};

use crate::constants::{DEFAULT_QR_SIZE, DEFAULT_QUIET_ZONE, MAX_QUIET_ZONE};
use crate::{Error, Result};

/// Output raster format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "gif" => Ok(ImageFormat::Gif),
            "bmp" => Ok(ImageFormat::Bmp),
            other => Err(format!("unsupported image format: {other}")),
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Everything needed to produce one QR raster
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeRequest {
    pub payload: String,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub hints: EncodeHints,
    /// Colour of dark modules
    pub on_color: Rgb<u8>,
    /// Background colour
    pub off_color: Rgb<u8>,
}

impl EncodeRequest {
    /// A 100x100 black-on-white PNG request with no hints
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            width: DEFAULT_QR_SIZE,
            height: DEFAULT_QR_SIZE,
            format: ImageFormat::default(),
            hints: EncodeHints::new(),
            on_color: Rgb([0, 0, 0]),
            off_color: Rgb([255, 255, 255]),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.hints.set_character_set(charset);
        self
    }

    pub fn with_error_correction(mut self, level: ErrorCorrection) -> Self {
        self.hints.set_error_correction(level);
        self
    }

    pub fn with_hint(mut self, key: HintKey, value: impl Into<String>) -> Self {
        self.hints.insert(key, value);
        self
    }

    pub fn with_colors(mut self, on_color: Rgb<u8>, off_color: Rgb<u8>) -> Self {
        self.on_color = on_color;
        self.off_color = off_color;
        self
    }
}

/// An encoded QR code rendered to pixels, tagged with its output format
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: RgbImage,
    format: ImageFormat,
}

impl RasterImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Write the raster to `path` in its format, whatever the extension says.
    pub fn write(&self, path: &Path) -> Result<()> {
        self.pixels
            .save_with_format(path, self.format.into())
            .map_err(|e| Error::image(path, e))
    }

    /// Encode the raster into an arbitrary seekable writer.
    pub fn write_to<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        self.pixels
            .write_to(writer, self.format.into())
            .map_err(|e| Error::Encoding(format!("{} encoding failed: {}", self.format.as_str(), e)))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.write_to(&mut cursor)?;
        Ok(cursor.into_inner())
    }
}

/// Encode a request into a raster. No file is touched.
pub fn encode(request: &EncodeRequest) -> Result<RasterImage> {
    if request.width == 0 || request.height == 0 {
        return Err(Error::Encoding(format!(
            "requested size must be positive, got {}x{}",
            request.width, request.height
        )));
    }

    let quiet_zone = match request.hints.get(&HintKey::Margin) {
        Some(value) => value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|m| *m <= MAX_QUIET_ZONE)
            .ok_or_else(|| Error::Encoding(format!("invalid margin: {value}")))?,
        None => DEFAULT_QUIET_ZONE,
    };

    let matrix = encode_matrix(&request.payload, &request.hints)?;
    let pixels = rasterize(&matrix, request, quiet_zone);

    Ok(RasterImage {
        pixels,
        format: request.format,
    })
}

/// Scale the module grid onto the requested canvas.
///
/// Modules get the largest whole-pixel size that fits symbol and quiet zone,
/// and the result is centred. A canvas too small for the symbol grows to one
/// pixel per module.
fn rasterize(matrix: &QrMatrix, request: &EncodeRequest, quiet_zone: u32) -> RgbImage {
    let modules = matrix.width() as u32;
    let input = modules + 2 * quiet_zone;
    let out_width = request.width.max(input);
    let out_height = request.height.max(input);
    let scale = (out_width / input).min(out_height / input);

    let left = (out_width - modules * scale) / 2;
    let top = (out_height - modules * scale) / 2;

    let mut image = RgbImage::from_pixel(out_width, out_height, request.off_color);
    for my in 0..modules {
        for mx in 0..modules {
            if !matrix.is_dark(mx as usize, my as usize) {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    image.put_pixel(left + mx * scale + dx, top + my * scale + dy, request.on_color);
                }
            }
        }
    }
    image
}
