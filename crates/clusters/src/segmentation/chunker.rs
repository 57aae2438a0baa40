//! Splits raw pasted text into discrete interview records

use once_cell::sync::Lazy;
use regex::Regex;

/// Fragments at or below this many characters are treated as noise
const MIN_FRAGMENT_CHARS: usize = 20;

static INTERVIEW_MARKER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)interview\s*\d+").expect("invalid interview marker pattern"));

/// One interview extracted from a raw submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewRecord {
  /// Position-derived identifier ("interview-1", "interview-2", ...)
  pub id: String,
  /// Trimmed interview text
  pub content: String,
}

/// Split raw pasted text on "Interview N" markers into trimmed records,
/// preserving original order and dropping fragments too short to be a real
/// interview. Callers decide what to do when fewer than two records survive.
pub fn chunk_interviews(raw_data: &str) -> Vec<InterviewRecord> {
  INTERVIEW_MARKER
    .split(raw_data)
    .map(str::trim)
    .filter(|fragment| fragment.chars().count() > MIN_FRAGMENT_CHARS)
    .enumerate()
    .map(|(index, fragment)| InterviewRecord {
      id: format!("interview-{}", index + 1),
      content: fragment.to_string(),
    })
    .collect()
}
