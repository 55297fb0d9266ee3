use std::{fs, io, path::{Path, PathBuf}};

use filetime::FileTime;

use crate::{
    error::{CopyError, CopyStage},
    sorter::plan::CopyTask,
};

/// Result of copying one planned file.
#[derive(Debug)]
pub struct CopyOutcome {
    pub source: PathBuf,
    pub result: Result<PathBuf, CopyError>,
}

/// Copies contents and permissions, then carries access and modification times over to the
/// target.
pub async fn copy_file(task: CopyTask) -> CopyOutcome {
    let result = copy_with_times(&task.source, &task.target).await.map(|()| task.target);
    CopyOutcome {
        source: task.source,
        result,
    }
}

async fn copy_with_times(source: &Path, target: &Path) -> Result<(), CopyError> {
    if let Some(dir) = target.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| CopyError::new(CopyStage::CreateDir, e))?;
    }
    if is_same_file(source, target).await {
        return Err(CopyError::new(
            CopyStage::Copy,
            io::Error::new(io::ErrorKind::AlreadyExists, "source and target are the same file"),
        ));
    }
    tokio::fs::copy(source, target)
        .await
        .map_err(|e| CopyError::new(CopyStage::Copy, e))?;

    let (source, target) = (source.to_path_buf(), target.to_path_buf());
    tokio::task::spawn_blocking(move || preserve_times(&source, &target))
        .await
        .map_err(|e| CopyError::new(CopyStage::PreserveTimes, io::Error::new(io::ErrorKind::Other, e)))?
        .map_err(|e| CopyError::new(CopyStage::PreserveTimes, e))
}

/// Copying a file onto itself would truncate it, which happens when a sorted tree is sorted
/// into itself again.
async fn is_same_file(source: &Path, target: &Path) -> bool {
    match (tokio::fs::canonicalize(source).await, tokio::fs::canonicalize(target).await) {
        (Ok(s), Ok(t)) => s == t,
        _ => false,
    }
}

fn preserve_times(source: &Path, target: &Path) -> io::Result<()> {
    let meta = fs::metadata(source)?;
    filetime::set_file_times(
        target,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )
}
