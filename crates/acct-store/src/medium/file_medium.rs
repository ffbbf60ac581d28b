//! Directory-backed medium, one file per key.

use crate::{Result as StoreErrorResult, StorageMedium, StoreError};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone)]
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    /// Opens `dir`, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreErrorResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.clone(), e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageMedium for FileMedium {
    fn read(&self, key: &str) -> StoreErrorResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::io(path, e))
    }

    /// Writes to a temp file, syncs it, then renames over the final path so a
    /// crash mid-write never leaves a truncated value behind.
    fn write(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        write_atomic(&self.dir, &self.path_for(key), value)?;
        debug!("Wrote {key} to {}", self.dir.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreErrorResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    /// Renames `<key>.json` to `<key>.json.corrupted.<timestamp>`.
    fn backup_corrupted(&self, key: &str) -> StoreErrorResult<()> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.dir.join(format!("{key}.json.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path).map_err(|e| StoreError::io(path.clone(), e))?;

        warn!("Backed up corrupted {key} to {backup_path:?}");
        Ok(())
    }
}

/// Temp file + fsync + rename, shared with the directory bridge.
pub(crate) fn write_atomic(dir: &Path, final_path: &Path, contents: &str) -> StoreErrorResult<()> {
    let file_name = final_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = dir.join(format!("{file_name}.tmp.{}", std::process::id()));

    {
        let mut file =
            fs::File::create(&temp_path).map_err(|e| StoreError::io(temp_path.clone(), e))?;

        file.write_all(contents.as_bytes())
            .map_err(|e| StoreError::io(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| StoreError::io(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, final_path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StoreError::io(final_path.to_path_buf(), e)
    })
}
