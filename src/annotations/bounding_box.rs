/// A struct representing a bounding box in normalized image coordinates.
///
/// Detection models emit boxes as fractions of the image height and width so
/// that the same box applies to any pixel resolution. This project uses the
/// standard convention of the left side of the image being x=0 and the top
/// of the image being y=0, so `(ymin, xmin)` is the top-left corner and
/// `(ymax, xmax)` the bottom-right one.
///
/// Well-formed boxes satisfy `ymin <= ymax` and `xmin <= xmax`. The
/// constructor does not enforce this: boxes come straight from the model and
/// malformed ones are handed to the renderer as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBox {
    pub ymin: f32,
    pub xmin: f32,
    pub ymax: f32,
    pub xmax: f32,
}

/// A bounding box resolved to pixel coordinates, still unclamped.
///
/// Coordinates may fall outside the image if the normalized box did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl NormalizedBox {
    pub fn new(ymin: f32, xmin: f32, ymax: f32, xmax: f32) -> Self {
        NormalizedBox {
            ymin,
            xmin,
            ymax,
            xmax,
        }
    }

    /// Resolves the box against an image of the given dimensions.
    ///
    /// Each coordinate is scaled by `(dimension - 1)` and rounded to the
    /// nearest pixel, so a box of (0.0, 0.0, 1.0, 1.0) spans the full image
    /// exactly.
    pub fn to_pixel_rect(&self, width: u32, height: u32) -> PixelRect {
        let max_y = height.saturating_sub(1) as f32;
        let max_x = width.saturating_sub(1) as f32;
        PixelRect {
            top: (self.ymin * max_y).round() as i32,
            left: (self.xmin * max_x).round() as i32,
            bottom: (self.ymax * max_y).round() as i32,
            right: (self.xmax * max_x).round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_rect_from_centered_box() {
        let bbox = NormalizedBox::new(0.1, 0.1, 0.5, 0.5);
        let rect = bbox.to_pixel_rect(640, 480);
        assert_eq!(
            rect,
            PixelRect {
                top: 48,
                left: 64,
                bottom: 240,
                right: 320,
            }
        );
    }

    #[test]
    fn pixel_rect_from_full_image_box() {
        let bbox = NormalizedBox::new(0.0, 0.0, 1.0, 1.0);
        let rect = bbox.to_pixel_rect(640, 480);
        assert_eq!(
            rect,
            PixelRect {
                top: 0,
                left: 0,
                bottom: 479,
                right: 639,
            }
        );
    }

    #[test]
    fn pixel_rect_from_degenerate_box() {
        // ymin == ymax collapses to a single pixel row.
        let bbox = NormalizedBox::new(0.5, 0.2, 0.5, 0.8);
        let rect = bbox.to_pixel_rect(100, 100);
        assert_eq!(rect.top, rect.bottom);
        assert!(rect.left < rect.right);
    }
}
