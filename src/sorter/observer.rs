use std::path::Path;

use crate::error::CopyError;

/// Receives per-file events from the sorter. Passed in by the caller instead of logging from
/// inside the copy tasks.
pub trait SortObserver: Send + Sync {
    fn copied(&self, source: &Path, target: &Path);

    fn failed(&self, source: &Path, error: &CopyError);

    /// An entry of the source tree could not be visited and was skipped.
    fn walk_error(&self, error: &walkdir::Error);
}

/// Forwards every event to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SortObserver for LogObserver {
    fn copied(&self, source: &Path, target: &Path) {
        log::info!("Copied {} -> {}", source.display(), target.display());
    }

    fn failed(&self, source: &Path, error: &CopyError) {
        log::error!("Error copying {}: {}", source.display(), error);
    }

    fn walk_error(&self, error: &walkdir::Error) {
        log::warn!("[Sort] Skipping unreadable entry: {}", error);
    }
}
