//! In-memory sample source for tests and embedding.

use ndarray::Array1;

use crate::analysis::types::DetectionResult;

use super::{SampleSource, Window};

/// A sample source backed by a pre-decoded buffer.
#[derive(Debug, Clone)]
pub struct MemorySource {
    samples: Vec<f64>,
    sample_rate: u32,
    position: usize,
}

impl MemorySource {
    /// Create a source over already-decoded mono samples.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            position: 0,
        }
    }
}

impl SampleSource for MemorySource {
    fn next_window(&mut self, size: usize) -> DetectionResult<Window> {
        let end = (self.position + size).min(self.samples.len());
        let window = Array1::from(self.samples[self.position..end].to_vec());
        self.position = end;
        Ok(window)
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_samples(&self) -> u64 {
        self.samples.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_full_windows_in_order() {
        let mut source = MemorySource::new(vec![1.0, 2.0, 3.0, 4.0], 8000);
        let first = source.next_window(2).unwrap();
        let second = source.next_window(2).unwrap();
        assert_eq!(first.to_vec(), vec![1.0, 2.0]);
        assert_eq!(second.to_vec(), vec![3.0, 4.0]);
    }

    #[test]
    fn final_window_is_partial() {
        let mut source = MemorySource::new(vec![1.0, 2.0, 3.0], 8000);
        assert_eq!(source.next_window(2).unwrap().len(), 2);
        assert_eq!(source.next_window(2).unwrap().len(), 1);
    }

    #[test]
    fn exhausted_source_returns_empty_windows() {
        let mut source = MemorySource::new(vec![1.0], 8000);
        let _ = source.next_window(4).unwrap();
        assert!(source.next_window(4).unwrap().is_empty());
        assert!(source.next_window(4).unwrap().is_empty());
    }

    #[test]
    fn reports_rate_and_length() {
        let source = MemorySource::new(vec![0.0; 10], 44100);
        assert_eq!(source.sample_rate(), 44100);
        assert_eq!(source.total_samples(), 10);
    }
}
