//! Shapes clustering results into display-ready customer segments

use crate::clustering::ClusterResult;
use crate::server::types::Segment;

/// Fixed display palette; clusters cycle through it by ordinal index
pub const PALETTE: [&str; 5] = ["#6366F1", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"];

/// Display floor so a small cluster never renders as 0%
const MIN_DISPLAY_PERCENTAGE: u32 = 10;

/// Longest quote shown before truncation, in characters
const MAX_QUOTE_CHARS: usize = 150;

/// Ordered (keywords, label) rows matched against the lowercased cluster
/// summary, first match wins. Row order is the tie-breaker.
const SEGMENT_LABELS: &[(&[&str], &str)] = &[
  (&["trust", "reliable"], "Consistency Focused"),
  (&["flexible", "schedule"], "Flexibility Seekers"),
  (&["special", "medical"], "Specialized Needs"),
  (&["comprehensive", "support"], "Comprehensive Support"),
];

/// Build one display segment per cluster: keyword-derived name, palette
/// color, rounded share of all clustered interviews (floored for display),
/// representative quote, and the cluster summary carried through verbatim.
///
/// Pure function; percentages here are pre-normalization values.
pub fn label_clusters(clusters: &[ClusterResult]) -> Vec<Segment> {
  let total_interviews: usize = clusters.iter().map(|cluster| cluster.data_points.len()).sum();

  clusters
    .iter()
    .enumerate()
    .map(|(index, cluster)| {
      let percentage = interview_share(cluster.data_points.len(), total_interviews);

      Segment {
        name: segment_name(&cluster.summary, index),
        percentage,
        count: cluster.data_points.len(),
        color: PALETTE[index % PALETTE.len()].to_string(),
        insight: cluster.summary.clone(),
        quote: truncate_quote(
          cluster.data_points.first().map_or("", |point| point.content.as_str()),
        ),
        summary: format!("{percentage}% of interviewed customers fall into this segment"),
      }
    })
    .collect()
}

fn interview_share(count: usize, total: usize) -> u32 {
  if total == 0 {
    return MIN_DISPLAY_PERCENTAGE;
  }

  let share = (100.0 * count as f64 / total as f64).round() as u32;
  share.max(MIN_DISPLAY_PERCENTAGE)
}

fn segment_name(summary: &str, index: usize) -> String {
  let summary = summary.to_lowercase();

  SEGMENT_LABELS
    .iter()
    .find(|(keywords, _)| keywords.iter().any(|keyword| summary.contains(keyword)))
    .map(|(_, label)| (*label).to_string())
    .unwrap_or_else(|| format!("Segment {}", index + 1))
}

fn truncate_quote(content: &str) -> String {
  if content.chars().count() > MAX_QUOTE_CHARS {
    let truncated: String = content.chars().take(MAX_QUOTE_CHARS).collect();
    format!("{truncated}...")
  } else {
    content.to_string()
  }
}

#[cfg(test)]
mod labeler_tests {
  use super::*;
  use crate::clustering::DataPoint;

  fn cluster(summary: &str, contents: &[&str]) -> ClusterResult {
    ClusterResult {
      id: serde_json::Value::Null,
      data_points: contents
        .iter()
        .enumerate()
        .map(|(index, content)| DataPoint {
          content: (*content).to_string(),
          id: format!("interview-{}", index + 1),
        })
        .collect(),
      summary: summary.to_string(),
      similarity_score: 0.8,
    }
  }

  #[test]
  fn test_every_label_row_matches_its_keywords() {
    let cases = [
      ("Parents trust the staff completely", "Consistency Focused"),
      ("Consistently reliable pickup times", "Consistency Focused"),
      ("Wants flexible drop-off windows", "Flexibility Seekers"),
      ("Needs a schedule that follows shift work", "Flexibility Seekers"),
      ("Children with special dietary requirements", "Specialized Needs"),
      ("Asks about medical staff on site", "Specialized Needs"),
      ("Looking for comprehensive care packages", "Comprehensive Support"),
      ("Values support beyond basic childcare", "Comprehensive Support"),
    ];

    for (summary, expected) in cases {
      assert_eq!(segment_name(summary, 0), expected, "summary: {summary}");
    }
  }

  #[test]
  fn test_label_matching_ignores_case() {
    assert_eq!(segment_name("TRUST is everything to these families", 0), "Consistency Focused");
  }

  #[test]
  fn test_earlier_rows_win_ties() {
    // Contains both "flexible" (row 2) and "trust" (row 1); row order decides
    assert_eq!(
      segment_name("They trust us to stay flexible about hours", 3),
      "Consistency Focused"
    );
  }

  #[test]
  fn test_unmatched_summary_falls_back_to_ordinal_name() {
    assert_eq!(segment_name("Mostly price sensitive families", 0), "Segment 1");
    assert_eq!(segment_name("Mostly price sensitive families", 4), "Segment 5");
  }

  #[test]
  fn test_colors_cycle_through_palette() {
    let long_interview = "This interview is long enough to be a believable data point.";
    let clusters: Vec<ClusterResult> =
      (0..7).map(|_| cluster("Price sensitive", &[long_interview])).collect();

    let segments = label_clusters(&clusters);
    assert_eq!(segments[0].color, PALETTE[0]);
    assert_eq!(segments[4].color, PALETTE[4]);
    assert_eq!(segments[5].color, PALETTE[0]);
    assert_eq!(segments[6].color, PALETTE[1]);
  }

  #[test]
  fn test_percentage_is_rounded_share_of_clustered_points() {
    let clusters = vec![
      cluster("They trust the teachers", &["one", "two", "three"]),
      cluster("Flexible hours matter most", &["four"]),
    ];

    let segments = label_clusters(&clusters);
    assert_eq!(segments[0].percentage, 75);
    assert_eq!(segments[1].percentage, 25);
  }

  #[test]
  fn test_small_shares_are_floored_for_display() {
    let filler = vec!["filler"; 19];
    let clusters = vec![
      cluster("Special medical needs", &["small cluster quote"]),
      cluster("Everyone else", &filler),
    ];

    let segments = label_clusters(&clusters);
    // True share is 5%; the display floor lifts it to 10
    assert_eq!(segments[0].percentage, 10);
    assert_eq!(segments[1].percentage, 95);
  }

  #[test]
  fn test_quote_is_first_data_point() {
    let clusters =
      vec![cluster("Flexible scheduling", &["the first quote wins", "the second does not"])];

    let segments = label_clusters(&clusters);
    assert_eq!(segments[0].quote, "the first quote wins");
  }

  #[test]
  fn test_quote_of_151_chars_is_truncated_with_ellipsis() {
    let content = "x".repeat(151);
    let clusters = vec![cluster("Flexible scheduling", &[content.as_str()])];

    let segments = label_clusters(&clusters);
    assert_eq!(segments[0].quote.chars().count(), 153);
    assert!(segments[0].quote.ends_with("..."));
    assert!(segments[0].quote.starts_with(&"x".repeat(150)));
  }

  #[test]
  fn test_quote_of_150_chars_is_untouched() {
    let content = "y".repeat(150);
    let clusters = vec![cluster("Flexible scheduling", &[content.as_str()])];

    let segments = label_clusters(&clusters);
    assert_eq!(segments[0].quote, content);
  }

  #[test]
  fn test_truncation_counts_characters_not_bytes() {
    // 151 two-byte characters must not split mid-code-point
    let content = "é".repeat(151);
    let truncated = truncate_quote(&content);

    assert_eq!(truncated.chars().count(), 153);
    assert!(truncated.starts_with(&"é".repeat(150)));
  }

  #[test]
  fn test_insight_carries_summary_verbatim() {
    let clusters = vec![cluster("They trust the morning staff.", &["a believable quote here"])];

    let segments = label_clusters(&clusters);
    assert_eq!(segments[0].insight, "They trust the morning staff.");
  }

  #[test]
  fn test_summary_template_interpolates_percentage() {
    let clusters = vec![
      cluster("They trust the teachers", &["one", "two", "three"]),
      cluster("Flexible hours matter most", &["four"]),
    ];

    let segments = label_clusters(&clusters);
    assert_eq!(segments[0].summary, "75% of interviewed customers fall into this segment");
  }

  #[test]
  fn test_count_reflects_cluster_size() {
    let clusters = vec![cluster("Flexible scheduling", &["one", "two", "three"])];

    let segments = label_clusters(&clusters);
    assert_eq!(segments[0].count, 3);
  }

  #[test]
  fn test_empty_cluster_gets_empty_quote() {
    let clusters = vec![ClusterResult {
      id: serde_json::Value::Null,
      data_points: Vec::new(),
      summary: "Nobody landed here".to_string(),
      similarity_score: 0.0,
    }];

    let segments = label_clusters(&clusters);
    assert_eq!(segments[0].quote, "");
    assert_eq!(segments[0].count, 0);
  }
}
