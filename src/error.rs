use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// The two parallel phases of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Map,
    Reduce,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Map => write!(f, "map"),
            Phase::Reduce => write!(f, "reduce"),
        }
    }
}

/// The text to analyze could not be obtained.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read input text from {source_name}: {cause}")]
    Unreadable {
        source_name: String,
        #[source]
        cause: io::Error,
    },
    #[error("input text is empty")]
    Empty,
}

/// Fatal failure of a pipeline run. Partial results are never returned alongside it.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
    #[error("a {phase} worker panicked: {message}")]
    WorkerPanicked { phase: Phase, message: String },
}

/// Step of a single file copy that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStage {
    CreateDir,
    Copy,
    PreserveTimes,
}

impl fmt::Display for CopyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyStage::CreateDir => write!(f, "create target directory"),
            CopyStage::Copy => write!(f, "copy contents"),
            CopyStage::PreserveTimes => write!(f, "preserve timestamps"),
        }
    }
}

/// Per-file failure, collected into the sort report.
#[derive(Debug, Error)]
#[error("failed to {stage}: {source}")]
pub struct CopyError {
    pub stage: CopyStage,
    #[source]
    pub source: io::Error,
}

impl CopyError {
    pub fn new(stage: CopyStage, source: io::Error) -> Self {
        Self { stage, source }
    }
}

/// Batch-level failure of the file sorter.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("invalid source directory: {}", .0.display())]
    InvalidSource(PathBuf),
    #[error("copy concurrency must be at least 1")]
    InvalidConcurrency,
    #[error("source walk did not complete: {0}")]
    Discovery(#[from] tokio::task::JoinError),
}
