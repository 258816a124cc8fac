//! Tone span detection for digitized audio.
//!
//! Scans a forward-streaming audio signal and flags contiguous spans
//! where the signal is monotonic (self-similar from one short window to
//! the next: a sustained tone, dead air, a recording artifact), using
//! consecutive-window valid-mode cross-correlation.
//!
//! The crate contains all detection logic with no I/O assumptions
//! beyond the [`SampleSource`] trait; it can be driven by the bundled
//! CLI binary, a service shell, or unit tests with synthetic audio.

pub mod analysis;
pub mod config;
pub mod logging;
pub mod models;
pub mod source;

pub use analysis::detector::ToneSpanDetector;
pub use analysis::types::{DetectionError, DetectionResult, ToneSpan};
pub use config::DetectorConfig;
pub use models::TimeUnit;
pub use source::{MemorySource, SampleSource, WavSource, Window};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
