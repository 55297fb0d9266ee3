use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use fnv::FnvHashSet;
use walkdir::{DirEntry, WalkDir};

use crate::error::SortError;

/// Directory for files whose name has no usable extension.
pub const UNKNOWN_DIR: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTask {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Name of the destination subdirectory for `path`: its last extension without the dot.
pub fn extension_dir(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => ext.to_string_lossy().into_owned(),
        _ => UNKNOWN_DIR.to_owned(),
    }
}

/// Files found under a source tree, plus the entries that could not be visited.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub walk_errors: Vec<walkdir::Error>,
}

/// Collects every regular file under `source`, in file name order. Symlinks to regular files are
/// collected, symlinked directories are not descended into. A `destination` nested inside
/// `source` is skipped; a `destination` equal to `source` is still walked.
///
/// Blocking, run it off the async runtime.
pub fn discover(source: &Path, destination: &Path) -> Result<Discovery, SortError> {
    if !source.is_dir() {
        return Err(SortError::InvalidSource(source.to_path_buf()));
    }
    // Only exists on re-runs, nothing to skip otherwise.
    let output = destination.canonicalize().ok();

    let mut discovery = Discovery::default();
    let walker = WalkDir::new(source)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_output_dir(e, output.as_deref()));
    for entry in walker {
        match entry {
            Ok(e) if is_sortable_file(&e) => discovery.files.push(e.into_path()),
            Ok(_) => {}
            Err(err) => discovery.walk_errors.push(err),
        }
    }
    Ok(discovery)
}

fn is_sortable_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_output_dir(entry: &DirEntry, output: Option<&Path>) -> bool {
    let Some(output) = output else {
        return false;
    };
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .path()
            .canonicalize()
            .map(|p| p == output)
            .unwrap_or(false)
}

/// Assigns every file its target `<destination>/<ext>/<name>`. Names already claimed earlier in
/// the batch get a `_<n>` suffix on the stem.
pub fn plan(files: Vec<PathBuf>, destination: &Path) -> Vec<CopyTask> {
    let mut claimed = FnvHashSet::default();
    let mut tasks = Vec::with_capacity(files.len());
    for source in files {
        let Some(name) = source.file_name() else {
            continue;
        };
        let dir = destination.join(extension_dir(&source));
        let mut target = dir.join(name);
        let mut n = 1;
        while claimed.contains(&target) {
            target = dir.join(suffixed_name(&source, n));
            n += 1;
        }
        claimed.insert(target.clone());
        tasks.push(CopyTask { source, target });
    }
    tasks
}

fn suffixed_name(path: &Path, n: usize) -> OsString {
    let mut name = path.file_stem().map(OsString::from).unwrap_or_default();
    name.push(format!("_{}", n));
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}
