//! Window similarity scoring.
//!
//! Pure functions with no side effects and no I/O. The score is the
//! arithmetic mean of the valid-mode cross-correlation of two windows:
//! correlation restricted to the region where both windows fully
//! overlap, without zero-padding.

use ndarray::s;

use crate::source::Window;

/// Score the similarity of two sample windows.
///
/// With equal lengths the valid region is the single zero-lag point,
/// so the result degenerates to one dot product. With unequal lengths
/// (a partial window near end-of-stream) the shorter window slides
/// over the longer one and the lag values are averaged.
///
/// Either window empty scores `0.0`, a defined "no match" rather than
/// an error, so the scan stays total.
pub fn score(a: &Window, b: &Window) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let lags = long.len() - short.len() + 1;

    let mut total = 0.0;
    for lag in 0..lags {
        total += long.slice(s![lag..lag + short.len()]).dot(short);
    }
    total / lags as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn window(samples: &[f64]) -> Window {
        Array1::from(samples.to_vec())
    }

    #[test]
    fn equal_length_windows_score_single_dot_product() {
        let a = window(&[1.0, 2.0, 3.0]);
        let b = window(&[4.0, 5.0, 6.0]);
        // 1*4 + 2*5 + 3*6 = 32
        assert!((score(&a, &b) - 32.0).abs() < 1e-12);
    }

    #[test]
    fn unequal_lengths_average_over_valid_lags() {
        let long = window(&[1.0, 1.0, 1.0, 1.0]);
        let short = window(&[1.0, 1.0]);
        // Three lag positions, each dot product 2.0
        assert!((score(&long, &short) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn argument_order_does_not_matter() {
        let long = window(&[1.0, 2.0, 3.0, 4.0]);
        let short = window(&[2.0, 1.0]);
        assert_eq!(score(&long, &short), score(&short, &long));
    }

    #[test]
    fn empty_window_scores_zero() {
        let empty = window(&[]);
        let filled = window(&[1.0, 2.0]);
        assert_eq!(score(&empty, &filled), 0.0);
        assert_eq!(score(&filled, &empty), 0.0);
        assert_eq!(score(&empty, &empty), 0.0);
    }

    #[test]
    fn identical_constant_windows_score_their_energy() {
        let a = window(&[1.0; 512]);
        assert!((score(&a, &a) - 512.0).abs() < 1e-9);
    }
}
