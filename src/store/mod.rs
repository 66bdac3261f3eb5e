//! Key-value persistence for room state.
//!
//! The hosted backend is reduced to two operations keyed by room code. Two
//! implementations ship with the crate:
//! - [`MemoryStore`]: process-local map, lost on restart
//! - [`FileStore`]: one JSON document per room on disk

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::models::RoomState;
use thiserror::Error;

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Backend holding one [`RoomState`] per room code. Saves replace the whole
/// document; there is no compare-and-swap.
pub trait RoomStore: Send + Sync {
    /// The stored state, or `None` if the room was never saved.
    fn load(&self, room: &str) -> Result<Option<RoomState>, StoreError>;

    /// Overwrite the stored state for `room`.
    fn save(&self, room: &str, state: &RoomState) -> Result<(), StoreError>;
}
