use crate::scorer::types::{AuthorLabel, Segment};

/// Collapses a per-token label sequence into maximal contiguous runs.
///
/// Segments are contiguous, non-overlapping, cover every token exactly
/// once, and come out in left-to-right order; concatenating their token
/// ranges reconstructs the original sequence exactly.
pub fn build(tokens: &[String], labels: &[AuthorLabel]) -> Vec<Segment> {
    debug_assert_eq!(tokens.len(), labels.len());
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current = labels[0];
    let mut start = 0;

    for (i, &label) in labels.iter().enumerate().skip(1) {
        if label != current {
            segments.push(Segment {
                label: current,
                start,
                end: i,
                text: tokens[start..i].join(" "),
            });
            current = label;
            start = i;
        }
    }

    segments.push(Segment {
        label: current,
        start,
        end: tokens.len(),
        text: tokens[start..].join(" "),
    });

    segments
}
