//! Rebalances rounded segment percentages toward a 100% total

use crate::server::types::Segment;

/// Rescale segment percentages in place so they sum to (approximately) 100.
///
/// A sum already at 100 is left untouched. After rescaling, each value rounds
/// independently, so the final sum can still land at 99 or 101; that residual
/// is accepted rather than redistributed.
pub fn normalize_percentages(segments: &mut [Segment]) {
  let total: u32 = segments.iter().map(|segment| segment.percentage).sum();
  if total == 100 || total == 0 {
    return;
  }

  for segment in segments.iter_mut() {
    segment.percentage = (100.0 * f64::from(segment.percentage) / f64::from(total)).round() as u32;
  }
}
