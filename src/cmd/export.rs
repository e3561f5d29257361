use clap::Args;
use std::fs;
use stylogram::config::AnalysisParams;
use stylogram::error::SgResult;
use stylogram::scorer::AttributionReport;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub params: AnalysisParams,

    /// Write the JSON report here instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

pub fn run(args: &ExportArgs, report: &AttributionReport) -> SgResult<()> {
    let json = serde_json::to_string_pretty(report)?;

    match &args.out {
        Some(path) => {
            fs::write(path, json)?;
            info!("Report written to {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
