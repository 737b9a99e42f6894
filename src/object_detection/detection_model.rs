use crate::annotations::detection::RawDetections;
use crate::errors::PipelineError;
use ndarray::ArrayView4;

/// The single seam between the pipeline and whatever inference runtime
/// actually executes the detector.
///
/// Implementations receive the decoded photograph as a uint8 tensor of shape
/// `(1, height, width, 3)` and return the model's raw candidates without
/// filtering or reordering them. Everything about the runtime (graph format,
/// execution provider, output tensor names) stays behind this trait.
pub trait DetectionModel {
    fn infer(&self, pixels: ArrayView4<'_, u8>) -> Result<RawDetections, PipelineError>;
}
