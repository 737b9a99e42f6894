use crate::errors::PipelineError;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Decodes raw encoded image bytes into a 3-channel pixel buffer.
pub fn decode_rgb_image(bytes: &[u8]) -> Result<RgbImage, image::ImageError> {
    Ok(image::load_from_memory(bytes)?.into_rgb8())
}

/// Reads and decodes the input photograph.
pub fn read_rgb_image(filepath: &Path) -> Result<RgbImage, PipelineError> {
    let bytes = fs::read(filepath).map_err(|source| PipelineError::ReadInput {
        path: filepath.to_path_buf(),
        source,
    })?;
    decode_rgb_image(&bytes).map_err(|source| PipelineError::Decode {
        path: filepath.to_path_buf(),
        source,
    })
}

/// Serializes the annotated buffer as JPEG at quality 100 and persists it.
///
/// The output is always JPEG, whatever extension the output path carries.
pub fn write_rgb_image_as_jpeg(rgb_image: &RgbImage, filepath: &Path) -> Result<(), PipelineError> {
    let file = File::create(filepath).map_err(|source| PipelineError::Write {
        path: filepath.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, 100);
    rgb_image
        .write_with_encoder(encoder)
        .map_err(PipelineError::Encode)
}
