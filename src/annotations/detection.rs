use crate::annotations::bounding_box::NormalizedBox;

/// A detection is what is produced as output from an object detection model.
///
/// A detection is a bounding box combined with a confidence score: a
/// probability value that encodes the model's belief that the detection is
/// true. The class id indexes into the model's label map; it is carried
/// through for logging but never rendered onto the output image.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub bbox: NormalizedBox,
    pub score: f32,
    pub class_id: u32,
}

/// The verbatim, unfiltered output of one inference call.
///
/// `num_detections` is the model's own count of valid entries;
/// `candidates` holds the full padded output and is at least that long.
#[derive(Debug, Clone, Default)]
pub struct RawDetections {
    pub num_detections: usize,
    pub candidates: Vec<Detection>,
}
