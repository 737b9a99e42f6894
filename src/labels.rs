/// The COCO 2017 label map used by the pretrained detector.
///
/// The model reports 1-based class ids into this 90-slot table. Ids that
/// were retired from the dataset are kept as `n/a` placeholders so that the
/// remaining ids line up. The table is built once at startup and never
/// consulted when rendering; it only gives detection log lines a readable
/// name.
pub const COCO_LABELS: &[&str] = &[
    "person",
    "bicycle",
    "car",
    "motorcycle",
    "airplane",
    "bus",
    "train",
    "truck",
    "boat",
    "traffic light",
    "fire hydrant",
    "n/a",
    "stop sign",
    "parking meter",
    "bench",
    "bird",
    "cat",
    "dog",
    "horse",
    "sheep",
    "cow",
    "elephant",
    "bear",
    "zebra",
    "giraffe",
    "n/a",
    "backpack",
    "umbrella",
    "n/a",
    "n/a",
    "handbag",
    "tie",
    "suitcase",
    "frisbee",
    "skis",
    "snowboard",
    "sports ball",
    "kite",
    "baseball bat",
    "baseball glove",
    "skateboard",
    "surfboard",
    "tennis racket",
    "bottle",
    "n/a",
    "wine glass",
    "cup",
    "fork",
    "knife",
    "spoon",
    "bowl",
    "banana",
    "apple",
    "sandwich",
    "orange",
    "broccoli",
    "carrot",
    "hot dog",
    "pizza",
    "donut",
    "cake",
    "chair",
    "couch",
    "potted plant",
    "bed",
    "n/a",
    "dining table",
    "n/a",
    "n/a",
    "toilet",
    "n/a",
    "tv",
    "laptop",
    "mouse",
    "remote",
    "keyboard",
    "cell phone",
    "microwave",
    "oven",
    "toaster",
    "sink",
    "refrigerator",
    "n/a",
    "book",
    "clock",
    "vase",
    "scissors",
    "teddy bear",
    "hair drier",
    "toothbrush",
];

/// An immutable lookup table from model class ids to category names.
#[derive(Debug)]
pub struct LabelTable {
    names: Vec<&'static str>,
}

impl LabelTable {
    pub fn coco() -> Self {
        LabelTable {
            names: COCO_LABELS.to_vec(),
        }
    }

    /// Looks up the category name for a 1-based class id.
    ///
    /// Retired slots and out-of-range ids resolve to `None`.
    pub fn name_for(&self, class_id: u32) -> Option<&str> {
        if class_id == 0 {
            return None;
        }
        match self.names.get(class_id as usize - 1) {
            Some(&"n/a") | None => None,
            Some(&name) => Some(name),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
