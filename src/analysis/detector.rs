//! The tone span scan state machine.
//!
//! Consumes fixed-size windows from a [`SampleSource`], scores
//! consecutive windows against a frozen reference, and accumulates
//! runs of high similarity into candidate spans. The scan is strictly
//! forward-streaming: every sample is examined at most twice (once as
//! probe, once as the subsequent reference), so the whole pass is O(n)
//! in total samples for a fixed window size.

use tracing::debug;

use crate::config::DetectorConfig;
use crate::source::SampleSource;

use super::filtering::filter_spans;
use super::similarity;
use super::types::{DetectionResult, ToneSpan};

/// Detects spans of monotonic audio in a sample stream.
///
/// One instance per input stream: the scan owns its entire state
/// (reference window, probe window, cursor, run duration) exclusively,
/// so instances must not be shared across concurrent scans. Repeated
/// scans over identical input and configuration are deterministic.
pub struct ToneSpanDetector {
    config: DetectorConfig,
}

impl ToneSpanDetector {
    /// Create a detector, rejecting invalid configuration up front.
    pub fn new(config: DetectorConfig) -> DetectionResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Scan the source and return filtered spans in the configured unit.
    ///
    /// Candidates shorter than the minimum length are dropped and the
    /// survivors converted from seconds to the configured time unit.
    pub fn scan(&self, source: &mut dyn SampleSource) -> DetectionResult<Vec<ToneSpan>> {
        let candidates = self.scan_candidates(source)?;
        Ok(filter_spans(
            candidates,
            self.config.length_threshold_ms,
            self.config.time_unit,
        ))
    }

    /// Scan the source and return raw candidate spans in seconds.
    ///
    /// The scan holds a reference window fixed while consecutive probe
    /// windows keep scoring at or above the tolerance; each match
    /// extends the run by one window. Holding the reference fixed for
    /// the whole run captures sustained similarity to the run's start
    /// rather than mere local smoothness; drift within tolerance
    /// compounds across the span.
    pub fn scan_candidates(
        &self,
        source: &mut dyn SampleSource,
    ) -> DetectionResult<Vec<ToneSpan>> {
        let sample_size = self.config.sample_size;
        let rate = source.sample_rate() as f64;

        // Stop boundary in samples: configured milliseconds converted
        // once, or the stream length when unset.
        let stop_point = match self.config.stop_at_ms {
            Some(ms) => millis_to_samples(ms, rate),
            None => source.total_samples(),
        };

        let mut spans = Vec::new();
        let mut reference = source.next_window(sample_size)?;
        let mut probe = source.next_window(sample_size)?;
        let mut samples_read = probe.len();

        let mut start_sample: u64 = 0;
        let mut duration: u64 = sample_size as u64;

        while samples_read >= sample_size && start_sample < stop_point {
            let mut similarity = similarity::score(&reference, &probe);
            let mut match_count = 0usize;

            // Tolerance comparison is inclusive: equality counts.
            while similarity >= self.config.tolerance {
                match_count += 1;
                duration += sample_size as u64;

                probe = source.next_window(sample_size)?;
                samples_read = probe.len();
                if samples_read == 0 {
                    break;
                }
                similarity = similarity::score(&reference, &probe);
            }

            if match_count > 0 {
                let span = ToneSpan::new(
                    start_sample as f64 / rate,
                    (start_sample + duration) as f64 / rate,
                );
                debug!(
                    start = span.start,
                    end = span.end,
                    matches = match_count,
                    "candidate span"
                );
                spans.push(span);
            }

            // Promote the last probe to reference so no sample is
            // decoded twice, then read a fresh probe.
            start_sample += duration;
            reference = probe;
            probe = source.next_window(sample_size)?;
            samples_read = probe.len();
            duration = sample_size as u64;
        }

        debug!(candidates = spans.len(), "scan complete");
        Ok(spans)
    }
}

/// Convert a millisecond offset to a sample index (floor).
fn millis_to_samples(ms: u64, sample_rate: f64) -> u64 {
    (ms as f64 * sample_rate / 1000.0) as u64
}
