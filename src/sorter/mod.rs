//! Copies a directory tree into per-extension subdirectories.
//!
//! The walk and the planning of target names happen up front. Copies then run with at most
//! `concurrency` in flight, and each one yields its own [`CopyOutcome`]. The [`FailurePolicy`]
//! decides what happens to the rest of the batch after a failure.

pub mod copy;
pub mod observer;
pub mod plan;

use std::path::PathBuf;

use futures::{stream::FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};

use crate::error::SortError;

pub use copy::{copy_file, CopyOutcome};
pub use observer::{LogObserver, SortObserver};
pub use plan::{discover, extension_dir, plan, CopyTask, Discovery, UNKNOWN_DIR};

pub const DEFAULT_CONCURRENCY: usize = 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Report the failed file and keep copying the others.
    #[default]
    Continue,
    /// Stop scheduling copies after the first failure. Copies already in flight still run to
    /// completion and are reported.
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub concurrency: usize,
    pub policy: FailurePolicy,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            destination: PathBuf::from("sorted"),
            concurrency: DEFAULT_CONCURRENCY,
            policy: FailurePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedCopy {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortReport {
    pub copied: usize,
    pub failed: Vec<FailedCopy>,
    pub aborted: bool,
}

impl SortReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && !self.aborted
    }
}

/// Sorts `config.source` into `config.destination`.
///
/// Only an invalid configuration or source fails the whole call. Per-file failures end up in the
/// returned report.
pub async fn sort_files(
    config: &SortConfig,
    observer: &dyn SortObserver,
) -> Result<SortReport, SortError> {
    if config.concurrency == 0 {
        return Err(SortError::InvalidConcurrency);
    }
    let (source, destination) = (config.source.clone(), config.destination.clone());
    let discovery = tokio::task::spawn_blocking(move || discover(&source, &destination)).await??;
    for err in &discovery.walk_errors {
        observer.walk_error(err);
    }
    let tasks = plan(discovery.files, &config.destination);
    log::info!(
        "[Sort] #{} file(s) found under {}, copying with up to #{} in flight",
        tasks.len(),
        config.source.display(),
        config.concurrency
    );

    let mut pending = tasks.into_iter();
    let mut in_flight = FuturesUnordered::new();
    in_flight.extend(pending.by_ref().take(config.concurrency).map(copy_file));

    let mut report = SortReport::default();
    while let Some(outcome) = in_flight.next().await {
        match outcome.result {
            Ok(target) => {
                observer.copied(&outcome.source, &target);
                report.copied += 1;
            }
            Err(e) => {
                observer.failed(&outcome.source, &e);
                report.failed.push(FailedCopy {
                    path: outcome.source,
                    reason: e.to_string(),
                });
                if config.policy == FailurePolicy::Abort && !report.aborted {
                    log::warn!(
                        "[Sort] Aborting the batch, waiting for #{} copy(ies) in flight",
                        in_flight.len()
                    );
                    report.aborted = true;
                }
            }
        }
        if !report.aborted {
            in_flight.extend(pending.next().map(copy_file));
        }
    }

    log::info!(
        "[Sort] Finished: #{} copied, #{} failed{}",
        report.copied,
        report.failed.len(),
        if report.aborted { ", aborted" } else { "" }
    );
    Ok(report)
}
