//! Sample sources: forward-streaming suppliers of audio windows.
//!
//! The detector pulls fixed-size windows through the [`SampleSource`]
//! trait and never seeks backward, so the scan state stays fully
//! contained and can be unit-tested without real audio I/O by
//! injecting a [`MemorySource`].

mod memory;
mod wav;

pub use memory::MemorySource;
pub use wav::WavSource;

use ndarray::Array1;

use crate::analysis::types::DetectionResult;

/// A fixed-length block of consecutive audio samples, in playback
/// order. Immutable once read.
pub type Window = Array1<f64>;

/// Supplies sequential windows of decoded audio samples.
pub trait SampleSource {
    /// Pull the next `size` samples from the stream.
    ///
    /// Returns fewer than `size` samples at end-of-stream, and an
    /// empty window on every call after exhaustion. The returned
    /// window's length is the number of samples actually read.
    fn next_window(&mut self, size: usize) -> DetectionResult<Window>;

    /// Samples per second of the stream. Positive for a valid source.
    fn sample_rate(&self) -> u32;

    /// Total stream length, in samples.
    fn total_samples(&self) -> u64;
}
