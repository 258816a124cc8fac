//! Core types for tone span detection.

use serde::{Deserialize, Serialize};

/// A detected monotonic region of the stream.
///
/// Bounds are in seconds when emitted by the detector; the filtering
/// stage may convert them to milliseconds. Invariant: `end > start`
/// (a span requires at least one matched extension beyond its initial
/// window).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpan {
    /// Start of the span.
    pub start: f64,
    /// End of the span.
    pub end: f64,
}

impl ToneSpan {
    /// Create a new span.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Span length, in whatever unit the bounds currently carry.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Error types for detection operations.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    /// Configuration rejected before scanning begins.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sample source cannot be opened or read.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// Sample decoding failed mid-stream.
    #[error("Decode error: {0}")]
    Decode(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error (config files, span output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for detection results.
pub type DetectionResult<T> = Result<T, DetectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_duration_is_end_minus_start() {
        let span = ToneSpan::new(1.5, 4.0);
        assert!((span.duration() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn span_serializes_to_json() {
        let span = ToneSpan::new(0.0, 2.0);
        let json = serde_json::to_string(&span).unwrap();
        let back: ToneSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(span, back);
    }
}
