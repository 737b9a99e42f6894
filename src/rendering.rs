use crate::annotations::detection::Detection;
use crate::image_utils::image_conversion::{
    convert_rgb_image_to_unit_f32, convert_unit_f32_to_rgb_image,
};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

/// RGBA box colors in the unit interval, cycled across detections.
///
/// The alpha component is carried for parity with the palette's RGBA layout
/// but the hollow-rect primitive ignores it.
pub const DEFAULT_PALETTE: [[f32; 4]; 3] = [
    [0.9, 0.3, 0.3, 0.0],
    [0.3, 0.3, 0.9, 0.0],
    [0.3, 0.9, 0.3, 0.0],
];

/// Draws hollow rectangles onto a photograph at each detection's position.
///
/// Drawing happens in the unit-interval f32 domain: the 8-bit buffer is
/// divided by 255, the outlines are painted, and the result is scaled back
/// and rounded to 8-bit samples. Colors cycle through the palette by
/// detection index. No label text is attached to the output.
pub struct BoxRenderer {
    palette: Vec<[f32; 4]>,
}

impl BoxRenderer {
    pub fn new(palette: Vec<[f32; 4]>) -> Self {
        BoxRenderer { palette }
    }

    /// Returns a new buffer of the same dimensions with one outline per
    /// detection. An empty detection slice yields a value-identical copy.
    pub fn annotate(&self, rgb_image: &RgbImage, detections: &[Detection]) -> RgbImage {
        let (width, height) = rgb_image.dimensions();
        let mut canvas = convert_rgb_image_to_unit_f32(rgb_image);
        for (index, detection) in detections.iter().enumerate() {
            let [r, g, b, _a] = self.palette[index % self.palette.len()];
            if let Some(rect) = clamp_to_image(detection, width, height) {
                draw_hollow_rect_mut(&mut canvas, rect, Rgb([r, g, b]));
            }
        }
        convert_unit_f32_to_rgb_image(&canvas)
    }
}

/// Clamps a detection's pixel rectangle into the image bounds.
///
/// Boxes are drawn as-is rather than validated: a malformed or degenerate
/// box collapses to the thinnest rectangle the clamped coordinates allow.
/// Only a box lying entirely outside the image produces nothing.
fn clamp_to_image(detection: &Detection, width: u32, height: u32) -> Option<Rect> {
    if width == 0 || height == 0 {
        return None;
    }
    let rect = detection.bbox.to_pixel_rect(width, height);
    if rect.right < 0 || rect.bottom < 0 || rect.left >= width as i32 || rect.top >= height as i32 {
        return None;
    }
    let left = rect.left.clamp(0, width as i32 - 1);
    let top = rect.top.clamp(0, height as i32 - 1);
    let right = rect.right.clamp(0, width as i32 - 1);
    let bottom = rect.bottom.clamp(0, height as i32 - 1);
    let rect_width = (right - left + 1).max(1) as u32;
    let rect_height = (bottom - top + 1).max(1) as u32;
    Some(Rect::at(left, top).of_size(rect_width, rect_height))
}
