use crate::scorer::types::{AuthorLabel, WindowReport};
use crate::scorer::LlrScorer;

/// Per-token outcome of projecting window scores back onto positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordScore {
    /// Mean score over all windows covering this position; 0.0 when no
    /// window covers it.
    pub score: f64,
    pub label: AuthorLabel,
}

/// Averages every covering window's score onto each token position and
/// re-labels the mean, giving a smoother, resolution-matched verdict per
/// word even though scoring happens at window granularity.
///
/// Positions covered by no window get score 0.0 and label NEITHER. That
/// is a policy, not an error.
pub fn aggregate(
    tokens: &[String],
    windows: &[WindowReport],
    scorer: &LlrScorer,
) -> Vec<WordScore> {
    let n = tokens.len();
    if n == 0 {
        return Vec::new();
    }

    let mut sums = vec![0.0f64; n];
    let mut counts = vec![0usize; n];

    for report in windows {
        for i in report.start..report.end {
            sums[i] += report.score;
            counts[i] += 1;
        }
    }

    (0..n)
        .map(|i| {
            let score = if counts[i] > 0 {
                sums[i] / counts[i] as f64
            } else {
                0.0
            };
            WordScore {
                score,
                label: scorer.label(score),
            }
        })
        .collect()
}

/// Just the labels, in token order.
pub fn word_labels(word_scores: &[WordScore]) -> Vec<AuthorLabel> {
    word_scores.iter().map(|w| w.label).collect()
}
