use crate::scorer::types::WindowReport;
use crate::scorer::LlrScorer;

/// Clamp policy: the window length actually scanned is
/// `max(2, min(requested, n))`, so any accused text of length >= 2
/// produces at least one window no matter what the caller asked for.
pub fn effective_window(requested: usize, num_tokens: usize) -> usize {
    requested.min(num_tokens).max(2)
}

/// Slides fixed-size windows with stride `step` over the accused tokens,
/// scoring each one.
///
/// Fewer than 2 tokens produce no windows; that is an empty result, not
/// an error. Windows overlap when `step < window`.
pub fn scan(
    tokens: &[String],
    scorer: &LlrScorer,
    window: usize,
    step: usize,
) -> Vec<WindowReport> {
    let n = tokens.len();
    if n < 2 {
        return Vec::new();
    }
    debug_assert!(step >= 1, "step is validated at the config boundary");

    let window = effective_window(window, n);

    let mut reports = Vec::new();
    let mut start = 0;
    while start + window <= n {
        let slice = &tokens[start..start + window];
        let score = scorer.score_window(slice);
        reports.push(WindowReport {
            start,
            end: start + window,
            score,
            label: scorer.label(score),
            snippet: slice.join(" "),
        });
        start += step;
    }
    reports
}
