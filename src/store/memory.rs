use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use super::{RoomStore, StoreError};
use crate::models::RoomState;

/// In-memory store: rooms by code behind a lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rooms: RwLock<HashMap<String, RoomState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rooms saved so far.
    pub fn len(&self) -> usize {
        self.rooms.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RoomStore for MemoryStore {
    fn load(&self, room: &str) -> Result<Option<RoomState>, StoreError> {
        let g = self.rooms.read().map_err(|_| StoreError::Poisoned)?;
        Ok(g.get(room).cloned())
    }

    fn save(&self, room: &str, state: &RoomState) -> Result<(), StoreError> {
        let mut g = self.rooms.write().map_err(|_| StoreError::Poisoned)?;
        g.insert(room.to_string(), state.clone());
        debug!("Saved room {:?} ({} rounds)", room, state.history.len());
        Ok(())
    }
}
