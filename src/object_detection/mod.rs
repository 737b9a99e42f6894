pub mod detection_filter;
pub mod detection_model;
pub mod ort_inference_session;
pub mod saved_detector;
