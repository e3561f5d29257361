use clap::{Parser, Subcommand};
use std::process;
use stylogram::api;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reference corpus for candidate author A.
    #[arg(global = true, short = 'a', long, default_value = "data/corpus_a.txt")]
    corpus_a: String,

    /// Reference corpus for candidate author B.
    #[arg(global = true, short = 'b', long, default_value = "data/corpus_b.txt")]
    corpus_b: String,

    /// The accused text to attribute.
    #[arg(global = true, short = 't', long, default_value = "data/accused.txt")]
    accused: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the analysis and print console reports.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Run the analysis and emit the structured report as JSON.
    Export(cmd::export::ExportArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("Initializing stylogram...");

    let params = match &cli.command {
        Commands::Analyze(args) => args.params.clone(),
        Commands::Export(args) => args.params.clone(),
    };

    let report = api::analyze_files(&cli.corpus_a, &cli.corpus_b, &cli.accused, &params)
        .unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        });

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(&args, &report),
        Commands::Export(args) => cmd::export::run(&args, &report),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
