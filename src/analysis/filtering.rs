//! Span filtering and unit conversion.
//!
//! Pure functions applied after the scan: drop candidate spans shorter
//! than the minimum length, then convert the survivors from seconds to
//! the requested output unit. Order and relative spacing are
//! preserved; no state is carried between spans.

use crate::models::TimeUnit;

use super::types::ToneSpan;

/// Filter candidate spans (in seconds) and convert to `unit`.
///
/// A span survives when `(end - start) * 1000 >= length_threshold_ms`;
/// the boundary is inclusive.
pub fn filter_spans(spans: Vec<ToneSpan>, length_threshold_ms: i64, unit: TimeUnit) -> Vec<ToneSpan> {
    spans
        .into_iter()
        .filter(|span| span.duration() * 1000.0 >= length_threshold_ms as f64)
        .map(|span| convert_span(span, unit))
        .collect()
}

/// Convert a span from seconds to the given unit.
pub fn convert_span(span: ToneSpan, unit: TimeUnit) -> ToneSpan {
    match unit {
        TimeUnit::Seconds => span,
        TimeUnit::Milliseconds => ToneSpan::new(span.start * 1000.0, span.end * 1000.0),
    }
}
