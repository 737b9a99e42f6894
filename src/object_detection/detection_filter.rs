use crate::annotations::detection::{Detection, RawDetections};

/// Detections at or below this confidence are dropped before rendering.
pub const SCORE_THRESHOLD: f32 = 0.3;

/// Keeps only the detections confident enough to be worth drawing.
///
/// The threshold is injected at construction so a caller can tighten or
/// loosen it without touching the filter itself.
#[derive(Debug, Clone, Copy)]
pub struct DetectionFilter {
    threshold: f32,
}

impl DetectionFilter {
    pub fn new(threshold: f32) -> Self {
        DetectionFilter { threshold }
    }

    /// Retains, among the first `num_detections` candidates, exactly those
    /// with a score strictly above the threshold, in the model's original
    /// emission order.
    pub fn filter(&self, raw: &RawDetections) -> Vec<Detection> {
        raw.candidates
            .iter()
            .take(raw.num_detections)
            .filter(|detection| detection.score > self.threshold)
            .cloned()
            .collect()
    }
}
