//! Bridge storing one JSON file per (player, game) record in a directory.

use crate::medium::file_medium::write_atomic;
use crate::{NativeStorageBridge, Result as StoreErrorResult, StoreError};

use acct_core::{NativeRecord, RecordKey};

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

const RECORD_EXTENSION: &str = "json";
const KEY_SEPARATOR: &str = "__";

#[derive(Debug, Clone)]
pub struct FsStorageBridge {
    dir: PathBuf,
}

impl FsStorageBridge {
    /// Opens `dir`, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreErrorResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.clone(), e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, player_id: &str, game_id: &str) -> PathBuf {
        self.dir.join(format!(
            "{}{KEY_SEPARATOR}{}.{RECORD_EXTENSION}",
            encode_component(player_id),
            encode_component(game_id)
        ))
    }

    fn read_record(&self, path: &Path) -> StoreErrorResult<Option<NativeRecord>> {
        let contents = fs::read_to_string(path).map_err(|e| StoreError::io(path.to_path_buf(), e))?;

        match serde_json::from_str::<NativeRecord>(&contents) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!("Skipping unreadable record file {path:?}: {e}");
                Ok(None)
            }
        }
    }
}

impl NativeStorageBridge for FsStorageBridge {
    fn get_accounts(&self) -> StoreErrorResult<Vec<NativeRecord>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| StoreError::io(self.dir.clone(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io(self.dir.clone(), e))?.path();
            if path.extension().is_some_and(|ext| ext == RECORD_EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            if let Some(record) = self.read_record(&path)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    fn get_account(
        &self,
        player_id: &str,
        game_id: &str,
    ) -> StoreErrorResult<Option<NativeRecord>> {
        let path = self.path_for(player_id, game_id);
        if !path.exists() {
            return Ok(None);
        }
        self.read_record(&path)
    }

    fn put_account(&self, record: &NativeRecord) -> StoreErrorResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        write_atomic(
            &self.dir,
            &self.path_for(&record.player_id, &record.game_id),
            &json,
        )
    }

    fn delete_account(&self, key: &RecordKey) -> StoreErrorResult<usize> {
        let path = self.path_for(&key.player_id, &key.game_id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(1),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

/// Percent-encodes everything outside `[A-Za-z0-9.-]`. Underscores are
/// encoded too, which keeps the `__` separator unambiguous.
pub(crate) fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'-' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
