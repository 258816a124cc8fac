//! Streaming WAV sample source.
//!
//! Decodes windows on demand through `hound` instead of loading the
//! whole file, keeping memory flat for long recordings. Both float and
//! integer PCM are supported; integer samples are scaled to the
//! [-1.0, 1.0) range. Multi-channel files contribute their first
//! channel only; the detector operates on a single channel stream.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::{SampleFormat, WavReader};
use ndarray::Array1;
use tracing::info;

use crate::analysis::types::{DetectionError, DetectionResult};

use super::{SampleSource, Window};

/// A forward-streaming sample source over a WAV file.
pub struct WavSource {
    reader: WavReader<BufReader<File>>,
    sample_rate: u32,
    channels: u16,
    sample_format: SampleFormat,
    /// Scale factor mapping integer PCM to [-1.0, 1.0).
    int_scale: f64,
    total_frames: u64,
}

impl WavSource {
    /// Open a WAV file for streaming.
    pub fn open(path: &Path) -> DetectionResult<Self> {
        let reader = WavReader::open(path).map_err(|e| {
            DetectionError::SourceUnavailable(format!("{}: {}", path.display(), e))
        })?;

        let spec = reader.spec();
        if spec.sample_rate == 0 {
            return Err(DetectionError::SourceUnavailable(format!(
                "{}: zero sample rate",
                path.display()
            )));
        }

        let total_frames = reader.duration() as u64;
        info!(
            path = %path.display(),
            sample_rate = spec.sample_rate,
            channels = spec.channels,
            frames = total_frames,
            "opened WAV source"
        );

        Ok(Self {
            reader,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            sample_format: spec.sample_format,
            int_scale: 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f64,
            total_frames,
        })
    }

    /// Read one raw sample (any channel) from the stream.
    fn next_raw(&mut self) -> Option<Result<f64, hound::Error>> {
        match self.sample_format {
            SampleFormat::Float => self
                .reader
                .samples::<f32>()
                .next()
                .map(|r| r.map(|v| v as f64)),
            SampleFormat::Int => {
                let scale = self.int_scale;
                self.reader
                    .samples::<i32>()
                    .next()
                    .map(|r| r.map(|v| v as f64 * scale))
            }
        }
    }
}

impl SampleSource for WavSource {
    fn next_window(&mut self, size: usize) -> DetectionResult<Window> {
        let mut samples = Vec::with_capacity(size);

        for _ in 0..size {
            // First channel carries the window sample; the rest of the
            // frame is consumed and discarded.
            match self.next_raw() {
                None => break,
                Some(Err(e)) => return Err(DetectionError::Decode(e.to_string())),
                Some(Ok(value)) => samples.push(value),
            }
            for _ in 1..self.channels {
                if let Some(Err(e)) = self.next_raw() {
                    return Err(DetectionError::Decode(e.to_string()));
                }
            }
        }

        Ok(Array1::from(samples))
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_samples(&self) -> u64 {
        self.total_frames
    }
}
