use crate::annotations::bounding_box::NormalizedBox;
use crate::annotations::detection::{Detection, RawDetections};
use crate::errors::PipelineError;
use crate::object_detection::detection_model::DetectionModel;
use crate::object_detection::ort_inference_session::OrtInferenceSession;
use ndarray::{ArrayView4, Ix1, Ix2, Ix3};
use ort::inputs;
use ort::session::SessionOutputs;
use std::path::Path;

/// A pretrained object detector exported with the standard serving
/// signature.
///
/// The graph takes one uint8 image batch named `input_tensor` and emits
/// `detection_boxes` (normalized ymin/xmin/ymax/xmax), `detection_scores`,
/// `detection_classes`, and `num_detections`, each padded out to the model's
/// fixed maximum box count. The session is created once at startup and used
/// for a single inference call.
pub struct SavedDetector {
    ort_session: OrtInferenceSession,
}

impl SavedDetector {
    pub fn new(model_path: &Path) -> Result<Self, PipelineError> {
        let ort_session =
            OrtInferenceSession::new(model_path).map_err(|source| PipelineError::ModelLoad {
                path: model_path.to_path_buf(),
                source,
            })?;
        Ok(SavedDetector { ort_session })
    }
}

impl DetectionModel for SavedDetector {
    fn infer(&self, pixels: ArrayView4<'_, u8>) -> Result<RawDetections, PipelineError> {
        let outputs: SessionOutputs = self
            .ort_session
            .session
            .run(inputs!["input_tensor" => pixels]?)?;

        let boxes = outputs["detection_boxes"]
            .try_extract_tensor::<f32>()?
            .into_dimensionality::<Ix3>()
            .map_err(|e| PipelineError::MalformedOutput(format!("detection_boxes: {e}")))?
            .into_owned();
        let scores = outputs["detection_scores"]
            .try_extract_tensor::<f32>()?
            .into_dimensionality::<Ix2>()
            .map_err(|e| PipelineError::MalformedOutput(format!("detection_scores: {e}")))?
            .into_owned();
        let classes = outputs["detection_classes"]
            .try_extract_tensor::<f32>()?
            .into_dimensionality::<Ix2>()
            .map_err(|e| PipelineError::MalformedOutput(format!("detection_classes: {e}")))?
            .into_owned();
        let num_detections = outputs["num_detections"]
            .try_extract_tensor::<f32>()?
            .into_dimensionality::<Ix1>()
            .map_err(|e| PipelineError::MalformedOutput(format!("num_detections: {e}")))?
            .first()
            .copied()
            .unwrap_or(0.0)
            .max(0.0) as usize;

        let max_boxes = scores.shape()[1];
        if boxes.shape() != [1, max_boxes, 4] {
            return Err(PipelineError::MalformedOutput(format!(
                "detection_boxes has shape {:?}, expected [1, {max_boxes}, 4]",
                boxes.shape()
            )));
        }

        let mut candidates = Vec::with_capacity(max_boxes);
        for index in 0..max_boxes {
            candidates.push(Detection {
                bbox: NormalizedBox::new(
                    boxes[[0, index, 0]],
                    boxes[[0, index, 1]],
                    boxes[[0, index, 2]],
                    boxes[[0, index, 3]],
                ),
                score: scores[[0, index]],
                class_id: classes[[0, index]] as u32,
            });
        }

        Ok(RawDetections {
            num_detections,
            candidates,
        })
    }
}
