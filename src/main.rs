mod annotations;
mod args;
mod errors;
mod image_utils;
mod labels;
mod object_detection;
mod pipeline;
mod rendering;

use anyhow::Result;
use clap::Parser;
use labels::LabelTable;
use object_detection::detection_filter::{DetectionFilter, SCORE_THRESHOLD};
use object_detection::saved_detector::SavedDetector;
use pipeline::Pipeline;
use rendering::{BoxRenderer, DEFAULT_PALETTE};
use std::path::Path;
use tracing::info;

/// Where the pretrained detector artifact lives, relative to the working
/// directory.
const MODEL_PATH: &str = "./data/models/detector.onnx";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = args::Args::parse();

    let model_path = Path::new(MODEL_PATH);
    if !model_path.exists() {
        return Err(anyhow::anyhow!(
            "Model path does not exist, or cannot be read: {:?}",
            model_path
        ));
    }

    let model = SavedDetector::new(model_path)?;
    info!(model = %model_path.display(), "loaded detection model");

    let pipeline = Pipeline::new(
        model,
        DetectionFilter::new(SCORE_THRESHOLD),
        BoxRenderer::new(DEFAULT_PALETTE.to_vec()),
        LabelTable::coco(),
    );

    let drawn = pipeline.run(&args.input, &args.output)?;
    if drawn == 0 {
        info!("nothing to annotate, no output written");
    }
    Ok(())
}
