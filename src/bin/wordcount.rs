use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sortcount::{
    app::{wc, TextSource},
    logging,
    mr::{Coordinator, PipelineConfig},
    report,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Count word frequencies in a text and show the most frequent ones.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Text file to analyze, `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// Worker pool size, 0 uses one worker per logical CPU
    #[arg(long, env = "WORDCOUNT_WORKERS", default_value_t = 0)]
    workers: usize,

    /// Number of words to show
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Width of the longest bar
    #[arg(long, default_value_t = 50)]
    width: usize,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = PipelineConfig {
        workers: args.workers,
    };
    let coordinator = Coordinator::new(&config).context("cannot start the worker pool")?;
    log::info!("[Configuration] #{} worker(s) | top #{}", coordinator.workers(), args.top);

    let source = TextSource::from_arg(args.input);
    let counts = wc::count_input(&coordinator, source.load()).context("word count failed")?;
    log::info!("[Reduce] #{} distinct word(s) counted", counts.len());

    let top = report::top_n(&counts, args.top);
    match args.format {
        Format::Text => print!("{}", report::render_bar_chart(&top, args.width)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&top)?),
    }
    Ok(())
}
