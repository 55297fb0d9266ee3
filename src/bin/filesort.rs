use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use sortcount::{
    logging,
    sorter::{self, FailurePolicy, LogObserver, SortConfig},
};

/// Copy every file of a directory tree into subdirectories named after the file extension.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Directory to read files from
    source: PathBuf,

    /// Directory that receives one subdirectory per extension
    destination: PathBuf,

    /// Maximum number of copies in flight
    #[arg(long, env = "FILESORT_CONCURRENCY", default_value_t = sorter::DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Stop at the first file that fails to copy
    #[arg(long)]
    fail_fast: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = SortConfig {
        source: args.source,
        destination: args.destination,
        concurrency: args.concurrency,
        policy: if args.fail_fast {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Continue
        },
    };

    let report = sorter::sort_files(&config, &LogObserver)
        .await
        .with_context(|| format!("cannot sort {}", config.source.display()))?;
    log::debug!("[Sort] Report: {}", serde_json::to_string(&report)?);

    if !report.is_success() {
        bail!(
            "{} file(s) failed to copy{}",
            report.failed.len(),
            if report.aborted { ", batch aborted" } else { "" }
        );
    }
    Ok(())
}
