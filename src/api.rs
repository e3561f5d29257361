use crate::config::AnalysisParams;
use crate::error::SgResult;
use crate::model::BigramModel;
use crate::scorer::scan::{effective_window, scan};
use crate::scorer::{aggregate, segment, AttributionReport, LabelCounts, LlrScorer};
use crate::tokenizer::tokenize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Runs the full attribution pipeline over three raw texts and returns the
/// structured report.
///
/// Training never fails on short input; the scan degrades to an empty
/// window list and every uncovered token defaults to NEITHER. The only
/// rejected inputs are malformed parameters.
pub fn run_analysis(
    corpus_a: &str,
    corpus_b: &str,
    accused: &str,
    params: &AnalysisParams,
) -> SgResult<AttributionReport> {
    params.validate()?;

    let tokens_a = tokenize(corpus_a);
    let tokens_b = tokenize(corpus_b);
    let tokens = tokenize(accused);
    info!(
        "Tokens: A={} B={} accused={}",
        tokens_a.len(),
        tokens_b.len(),
        tokens.len()
    );

    let model_a = BigramModel::train(&tokens_a, params.smoothing_k);
    let model_b = BigramModel::train(&tokens_b, params.smoothing_k);
    let scorer = LlrScorer::new(model_a, model_b, params.eps_neither);
    debug!("Vocabulary union size: {}", scorer.vocab_size());

    let eff_window = if tokens.is_empty() {
        params.window
    } else {
        effective_window(params.window, tokens.len())
    };

    let windows = scan(&tokens, &scorer, params.window, params.step);
    let word_scores = aggregate::aggregate(&tokens, &windows, &scorer);
    let word_labels = aggregate::word_labels(&word_scores);
    let segments = segment::build(&tokens, &word_labels);

    let window_counts = LabelCounts::tally(windows.iter().map(|w| w.label));
    let word_counts = LabelCounts::tally(word_labels.iter().copied());
    info!(
        "Scored {} windows, {} segments",
        windows.len(),
        segments.len()
    );

    Ok(AttributionReport {
        params: params.clone(),
        effective_window: eff_window,
        corpus_a_tokens: tokens_a.len(),
        corpus_b_tokens: tokens_b.len(),
        tokens,
        windows,
        word_labels,
        segments,
        window_counts,
        word_counts,
    })
}

/// Loads the three corpora from disk and runs the analysis. I/O failures
/// surface unchanged to the caller.
pub fn analyze_files<P: AsRef<Path>>(
    corpus_a: P,
    corpus_b: P,
    accused: P,
    params: &AnalysisParams,
) -> SgResult<AttributionReport> {
    info!("Loading corpus A: {}", corpus_a.as_ref().display());
    let text_a = fs::read_to_string(corpus_a)?;
    info!("Loading corpus B: {}", corpus_b.as_ref().display());
    let text_b = fs::read_to_string(corpus_b)?;
    info!("Loading accused text: {}", accused.as_ref().display());
    let text_accused = fs::read_to_string(accused)?;

    run_analysis(&text_a, &text_b, &text_accused, params)
}
