use crate::reports;
use clap::Args;
use stylogram::config::AnalysisParams;
use stylogram::error::SgResult;
use stylogram::scorer::AttributionReport;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub params: AnalysisParams,

    /// Maximum number of window rows to print.
    #[arg(long, default_value_t = 30)]
    pub limit: usize,

    /// Words per row in the word-level listing.
    #[arg(long, default_value_t = 12)]
    pub per_line: usize,
}

pub fn run(args: &AnalyzeArgs, report: &AttributionReport) -> SgResult<()> {
    println!(
        "\nTokens: A={}  B={}  accused={}",
        report.corpus_a_tokens,
        report.corpus_b_tokens,
        report.tokens.len()
    );
    println!(
        "Params: window={} step={} smoothing_k={} eps_neither={}",
        report.effective_window,
        report.params.step,
        report.params.smoothing_k,
        report.params.eps_neither
    );

    reports::print_window_report(&report.windows, args.limit);
    reports::print_word_labels(&report.tokens, &report.word_labels, args.per_line);
    reports::print_segment_report(&report.segments);
    reports::print_summary(&report.window_counts, &report.word_counts);

    Ok(())
}
