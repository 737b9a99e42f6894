use clap::Parser;
use std::path::PathBuf;

/// Draw bounding boxes around objects detected in a photograph.
///
/// Both arguments are required; getting the count wrong fails during
/// parsing, before the detection model is loaded or any file is touched.
#[derive(Parser, Debug)]
#[command(name = "image-annotator", version)]
pub struct Args {
    /// Path to the input photograph.
    pub input: PathBuf,

    /// Path the annotated JPEG copy is written to.
    pub output: PathBuf,
}
