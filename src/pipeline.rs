use crate::errors::PipelineError;
use crate::image_utils::image_conversion::convert_rgb_image_to_batched_array;
use crate::image_utils::image_io::{read_rgb_image, write_rgb_image_as_jpeg};
use crate::labels::LabelTable;
use crate::object_detection::detection_filter::DetectionFilter;
use crate::object_detection::detection_model::DetectionModel;
use crate::rendering::BoxRenderer;
use std::path::Path;
use tracing::{debug, info};

/// The detection-to-annotation pipeline.
///
/// One photograph in, one annotated photograph out:
/// decode, infer, filter, draw, encode, each stage handing its buffer to the
/// next. The only branch is the zero-detection short-circuit: when nothing
/// survives the filter, no output file is created at all.
pub struct Pipeline<M: DetectionModel> {
    model: M,
    filter: DetectionFilter,
    renderer: BoxRenderer,
    labels: LabelTable,
}

impl<M: DetectionModel> Pipeline<M> {
    pub fn new(model: M, filter: DetectionFilter, renderer: BoxRenderer, labels: LabelTable) -> Self {
        Pipeline {
            model,
            filter,
            renderer,
            labels,
        }
    }

    /// Runs the pipeline once, returning the number of boxes drawn.
    ///
    /// A return of 0 means the output path was left untouched.
    pub fn run(&self, input_path: &Path, output_path: &Path) -> Result<usize, PipelineError> {
        let image = read_rgb_image(input_path)?;
        let (width, height) = image.dimensions();
        debug!(width, height, "decoded input image");

        let input_array = convert_rgb_image_to_batched_array(&image);
        let raw = self.model.infer(input_array.view())?;
        debug!(
            num_detections = raw.num_detections,
            candidates = raw.candidates.len(),
            "model inference complete"
        );

        let detections = self.filter.filter(&raw);
        if detections.is_empty() {
            info!("no detections above threshold, skipping output");
            return Ok(0);
        }

        for detection in &detections {
            let label = self.labels.name_for(detection.class_id).unwrap_or("unknown");
            info!(
                label,
                score = detection.score,
                ymin = detection.bbox.ymin,
                xmin = detection.bbox.xmin,
                ymax = detection.bbox.ymax,
                xmax = detection.bbox.xmax,
                "keeping detection"
            );
        }

        let annotated = self.renderer.annotate(&image, &detections);
        write_rgb_image_as_jpeg(&annotated, output_path)?;
        info!(output = %output_path.display(), boxes = detections.len(), "wrote annotated image");
        Ok(detections.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::bounding_box::NormalizedBox;
    use crate::annotations::detection::{Detection, RawDetections};
    use crate::object_detection::detection_filter::SCORE_THRESHOLD;
    use crate::rendering::DEFAULT_PALETTE;
    use image::{Rgb, RgbImage};
    use ndarray::ArrayView4;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    /// A canned model so the pipeline can be exercised without an inference
    /// runtime.
    struct StubModel {
        raw: RawDetections,
    }

    impl DetectionModel for StubModel {
        fn infer(&self, _pixels: ArrayView4<'_, u8>) -> Result<RawDetections, PipelineError> {
            Ok(self.raw.clone())
        }
    }

    fn pipeline_with(raw: RawDetections) -> Pipeline<StubModel> {
        Pipeline::new(
            StubModel { raw },
            DetectionFilter::new(SCORE_THRESHOLD),
            BoxRenderer::new(DEFAULT_PALETTE.to_vec()),
            LabelTable::coco(),
        )
    }

    fn write_test_input(name: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        let image = RgbImage::from_pixel(64, 48, Rgb([40, 40, 40]));
        image.save(&path).unwrap();
        path
    }

    fn detection(score: f32) -> Detection {
        Detection {
            bbox: NormalizedBox::new(0.1, 0.1, 0.5, 0.5),
            score,
            class_id: 1,
        }
    }

    #[test]
    fn zero_detections_create_no_output_file() {
        let input = write_test_input("image_annotator_pipeline_empty_in.png");
        let output = env::temp_dir().join("image_annotator_pipeline_empty_out.jpg");
        let _ = fs::remove_file(&output);

        let pipeline = pipeline_with(RawDetections::default());
        let drawn = pipeline.run(&input, &output).unwrap();

        assert_eq!(drawn, 0);
        assert!(!output.exists());
        let _ = fs::remove_file(&input);
    }

    #[test]
    fn low_confidence_detections_create_no_output_file() {
        let input = write_test_input("image_annotator_pipeline_low_in.png");
        let output = env::temp_dir().join("image_annotator_pipeline_low_out.jpg");
        let _ = fs::remove_file(&output);

        let pipeline = pipeline_with(RawDetections {
            num_detections: 2,
            candidates: vec![detection(0.1), detection(0.3)],
        });
        let drawn = pipeline.run(&input, &output).unwrap();

        assert_eq!(drawn, 0);
        assert!(!output.exists());
        let _ = fs::remove_file(&input);
    }

    #[test]
    fn surviving_detections_produce_an_annotated_jpeg() {
        let input = write_test_input("image_annotator_pipeline_hit_in.png");
        let output = env::temp_dir().join("image_annotator_pipeline_hit_out.jpg");
        let _ = fs::remove_file(&output);

        let pipeline = pipeline_with(RawDetections {
            num_detections: 3,
            candidates: vec![detection(0.9), detection(0.2), detection(0.5)],
        });
        let drawn = pipeline.run(&input, &output).unwrap();

        assert_eq!(drawn, 2);
        let written = image::open(&output).unwrap().into_rgb8();
        assert_eq!(written.dimensions(), (64, 48));
        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }

    #[test]
    fn missing_input_image_is_a_read_error() {
        let pipeline = pipeline_with(RawDetections::default());
        let result = pipeline.run(
            Path::new("/nonexistent/image_annotator_missing.png"),
            Path::new("/nonexistent/out.jpg"),
        );
        assert!(matches!(result, Err(PipelineError::ReadInput { .. })));
    }
}
