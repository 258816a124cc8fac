//! Tone span detection pipeline.
//!
//! - `similarity`: valid-mode cross-correlation between two windows
//! - `detector`: the scan state machine producing candidate spans
//! - `filtering`: minimum-duration filter and time unit conversion
//! - `types`: span record, error enum, result alias

pub mod detector;
pub mod filtering;
pub mod similarity;
pub mod types;

pub use detector::ToneSpanDetector;
pub use types::{DetectionError, DetectionResult, ToneSpan};
