use std::io;
use std::path::PathBuf;

/// Everything that can go wrong between reading the input image and writing
/// the annotated copy.
///
/// Every variant is fatal: the pipeline makes no attempt to retry or to
/// produce partial output, so errors propagate straight to the process
/// boundary.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// The detection model could not be loaded from its on-disk artifact.
    #[error("failed to load detection model from {path}: {source}")]
    ModelLoad { path: PathBuf, source: ort::Error },

    /// The input image file could not be read from disk.
    #[error("failed to read input image {path}: {source}")]
    ReadInput { path: PathBuf, source: io::Error },

    /// The input bytes are not a decodable image.
    #[error("failed to decode input image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The inference call itself failed at runtime.
    #[error("model inference failed: {0}")]
    Inference(#[from] ort::Error),

    /// The model ran but returned tensors of an unexpected rank or shape.
    #[error("model returned malformed output: {0}")]
    MalformedOutput(String),

    /// The annotated image could not be serialized to JPEG.
    #[error("failed to encode annotated image: {0}")]
    Encode(image::ImageError),

    /// The encoded output could not be persisted.
    #[error("failed to write annotated image to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}
