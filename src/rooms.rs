//! Room operations over a [`RoomStore`]: read, replace and patch one match.
//!
//! Inputs are validated before the store is touched. Patching is a plain
//! read-modify-write with no guard against a concurrent writer.

use log::{debug, info};
use thiserror::Error;

use crate::logic::round_loser;
use crate::models::{MatchPatch, RoomState, Roster, RoundId};
use crate::store::{RoomStore, StoreError};

/// Errors from room operations, each mapping to one HTTP status.
#[derive(Debug, Error)]
pub enum RoomError {
    /// Missing or empty request fields (400).
    #[error("{0}")]
    Validation(String),

    /// Room, round or match absent (404).
    #[error("{0}")]
    NotFound(String),

    /// Backend failure (500).
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Reject a missing or blank room code. The code itself is kept as given.
pub fn require_room(room: Option<&str>) -> Result<&str, RoomError> {
    match room {
        Some(r) if !r.trim().is_empty() => Ok(r),
        _ => Err(RoomError::Validation("Room code is required.".to_string())),
    }
}

/// Stored state for a room; `None` if it was never saved.
pub fn read(store: &dyn RoomStore, room: Option<&str>) -> Result<Option<RoomState>, RoomError> {
    let room = require_room(room)?;
    let state = store.load(room)?;
    debug!("Read room {:?}: {}", room, if state.is_some() { "found" } else { "absent" });
    Ok(state)
}

/// Overwrite the whole room. Last writer wins.
pub fn replace(
    store: &dyn RoomStore,
    room: Option<&str>,
    state: Option<&RoomState>,
) -> Result<(), RoomError> {
    let (room, state) = match (room, state) {
        (Some(room), Some(state)) if !room.trim().is_empty() => (room, state),
        _ => {
            return Err(RoomError::Validation(
                "Room code and data are required.".to_string(),
            ))
        }
    };
    store.save(room, state)?;
    info!("Replaced room {:?} ({} rounds in history)", room, state.history.len());
    Ok(())
}

/// A request to change one match of a completed round. `match_index` is
/// signed as received; an index outside the round is a missing match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatchRequest<'a> {
    pub room: Option<&'a str>,
    pub round_id: Option<RoundId>,
    pub match_index: Option<i64>,
    pub updated_match: Option<&'a MatchPatch>,
}

/// Merge new scores into one match of a completed round and save the room.
///
/// The round's loser snapshot is recomputed with the same rule used when a
/// round is finished (faults included). Nothing is written if the room,
/// round or match does not exist.
pub fn patch_match(
    store: &dyn RoomStore,
    roster: &Roster,
    request: PatchRequest<'_>,
) -> Result<(), RoomError> {
    let (room, round_id, match_index, patch) = match request {
        PatchRequest {
            room: Some(room),
            round_id: Some(round_id),
            match_index: Some(match_index),
            updated_match: Some(patch),
        } if !room.trim().is_empty() && !patch.is_empty() => (room, round_id, match_index, patch),
        _ => {
            return Err(RoomError::Validation(
                "room, roundId, matchIndex and updatedMatch are required.".to_string(),
            ))
        }
    };

    let mut state = store
        .load(room)?
        .ok_or_else(|| RoomError::NotFound("Room not found.".to_string()))?;
    let round = state
        .round_mut(round_id)
        .ok_or_else(|| RoomError::NotFound(format!("Round {} not found.", round_id)))?;
    let m = usize::try_from(match_index)
        .ok()
        .and_then(|i| round.matches.get_mut(i))
        .ok_or_else(|| RoomError::NotFound(format!("Match {} not found.", match_index)))?;
    m.apply(patch);

    round.loser_index = round_loser(&round.matches, Some(&round.faults));
    round.loser_name = roster.loser_name(round.loser_index);
    info!(
        "Patched room {:?} round {} match {}; loser now {}",
        room, round_id, match_index, round.loser_name
    );

    store.save(room, &state)?;
    Ok(())
}
