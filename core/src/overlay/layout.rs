//! Text placement on the label canvas
//!
//! Positions are kept as fractions of a 400x400 reference canvas and scaled
//! to the actual image, so the default label keeps its familiar layout while
//! other sizes stay proportional.

use crate::constants::OVERLAY_REFERENCE_SIZE;

/// One line of text: left edge, baseline and pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSlot {
    pub x: i32,
    pub baseline: i32,
    pub size: f32,
}

/// Reference placement in 400x400 canvas pixels: (x, baseline, size)
const CATEGORY_SLOT: (f32, f32, f32) = (20.0, 200.0, 12.0);
const PAYLOAD_SLOT: (f32, f32, f32) = (50.0, 365.0, 12.0);
const DISPLAY_NAME_SLOT: (f32, f32, f32) = (50.0, 385.0, 20.0);

/// Placement of the three label lines on a given canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub category: TextSlot,
    pub payload: TextSlot,
    pub display_name: TextSlot,
}

impl Layout {
    pub fn for_canvas(width: u32, height: u32) -> Self {
        let sx = width as f32 / OVERLAY_REFERENCE_SIZE;
        let sy = height as f32 / OVERLAY_REFERENCE_SIZE;
        let slot = |(x, baseline, size): (f32, f32, f32)| TextSlot {
            x: (x * sx).round() as i32,
            baseline: (baseline * sy).round() as i32,
            size: size * sy,
        };

        Self {
            category: slot(CATEGORY_SLOT),
            payload: slot(PAYLOAD_SLOT),
            display_name: slot(DISPLAY_NAME_SLOT),
        }
    }
}
