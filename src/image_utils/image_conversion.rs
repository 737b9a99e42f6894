use image::{Rgb, Rgb32FImage, RgbImage};
use ndarray::Array4;

/// Converts a decoded image into the batched tensor the detector expects.
///
/// The detector's serving signature takes uint8 samples in NHWC layout with
/// a leading batch dimension of 1, so the output shape is
/// `(1, height, width, 3)`.
pub fn convert_rgb_image_to_batched_array(rgb_image: &RgbImage) -> Array4<u8> {
    let mut image_array = Array4::zeros((
        1,
        rgb_image.height() as usize,
        rgb_image.width() as usize,
        3,
    ));
    for (x, y, pixel) in rgb_image.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        image_array[[0, y as usize, x as usize, 0]] = r;
        image_array[[0, y as usize, x as usize, 1]] = g;
        image_array[[0, y as usize, x as usize, 2]] = b;
    }
    image_array
}

/// Rescales an 8-bit image into the unit interval by dividing by 255.
pub fn convert_rgb_image_to_unit_f32(rgb_image: &RgbImage) -> Rgb32FImage {
    let mut unit_image = Rgb32FImage::new(rgb_image.width(), rgb_image.height());
    for (x, y, pixel) in rgb_image.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        unit_image.put_pixel(
            x,
            y,
            Rgb([
                (r as f32) / 255.0,
                (g as f32) / 255.0,
                (b as f32) / 255.0,
            ]),
        );
    }
    unit_image
}

/// Rescales a unit-interval image back to 8-bit samples.
///
/// Values are multiplied by 255, rounded to the nearest integer, and clamped
/// into the valid sample range.
pub fn convert_unit_f32_to_rgb_image(unit_image: &Rgb32FImage) -> RgbImage {
    let mut rgb_image = RgbImage::new(unit_image.width(), unit_image.height());
    for (x, y, pixel) in unit_image.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        rgb_image.put_pixel(
            x,
            y,
            Rgb([
                (r * 255.0).round().clamp(0.0, 255.0) as u8,
                (g * 255.0).round().clamp(0.0, 255.0) as u8,
                (b * 255.0).round().clamp(0.0, 255.0) as u8,
            ]),
        );
    }
    rgb_image
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image() -> RgbImage {
        RgbImage::from_fn(16, 16, |x, y| {
            Rgb([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8])
        })
    }

    #[test]
    fn batched_array_has_nhwc_layout() {
        let img = gradient_image();
        let array = convert_rgb_image_to_batched_array(&img);
        assert_eq!(array.shape(), &[1, 16, 16, 3]);
        // Pixel (x=3, y=5) lands at [batch, row, col, channel].
        let pixel = img.get_pixel(3, 5);
        assert_eq!(array[[0, 5, 3, 0]], pixel.0[0]);
        assert_eq!(array[[0, 5, 3, 1]], pixel.0[1]);
        assert_eq!(array[[0, 5, 3, 2]], pixel.0[2]);
    }

    #[test]
    fn unit_rescale_round_trips_every_sample_value() {
        let all_values = RgbImage::from_fn(256, 1, |x, _| Rgb([x as u8, x as u8, x as u8]));
        let restored = convert_unit_f32_to_rgb_image(&convert_rgb_image_to_unit_f32(&all_values));
        assert_eq!(restored, all_values);
    }

    #[test]
    fn unit_rescale_clamps_out_of_range_values() {
        let mut unit_image = Rgb32FImage::new(1, 1);
        unit_image.put_pixel(0, 0, Rgb([-0.5, 1.5, 0.5]));
        let rgb = convert_unit_f32_to_rgb_image(&unit_image);
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([0, 255, 128]));
    }
}
