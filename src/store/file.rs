//! JSON file storage.
//!
//! Each room is one pretty-printed JSON document named after the hex-encoded
//! room code, so any room code maps to a safe file name.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{RoomStore, StoreError};
use crate::models::RoomState;

/// Directory of `<hex(room)>.json` documents.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File holding the state for a room code.
    pub fn room_path(&self, room: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", hex::encode(room)))
    }

    /// Ensure the data directory exists.
    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl RoomStore for FileStore {
    fn load(&self, room: &str) -> Result<Option<RoomState>, StoreError> {
        let path = self.room_path(room);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state = serde_json::from_str(&content)?;
        debug!("Loaded room {:?} from {:?}", room, path);
        Ok(Some(state))
    }

    /// Write to a temp file first, then rename over the old document.
    fn save(&self, room: &str, state: &RoomState) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let path = self.room_path(room);
        let tmp = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(state)?;
        let mut file = fs::File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, &path)?;

        info!("Saved room {:?} to {:?}", room, path);
        Ok(())
    }
}
