//! RoomState: everything persisted under one room code.

use crate::models::round::{ActiveRound, RoundId, RoundRecord};
use serde::{Deserialize, Serialize};

/// History of completed rounds plus the round currently being played.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomState {
    #[serde(default)]
    pub history: Vec<RoundRecord>,
    #[serde(default)]
    pub current_round: ActiveRound,
}

impl RoomState {
    pub fn round(&self, id: RoundId) -> Option<&RoundRecord> {
        self.history.iter().find(|r| r.id == id)
    }

    pub fn round_mut(&mut self, id: RoundId) -> Option<&mut RoundRecord> {
        self.history.iter_mut().find(|r| r.id == id)
    }

    /// Keep history in chronological order. Stable, so equal dates keep
    /// their insertion order.
    pub fn sort_history(&mut self) {
        self.history.sort_by_key(|r| r.date);
    }
}
