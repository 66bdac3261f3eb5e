//! Round commands: entering scores and faults, finishing, reopening and
//! resetting the active round.
//!
//! Every command mutates the room state in place; the caller persists the
//! whole room afterwards and re-renders.

use crate::logic::loser::round_loser;
use crate::logic::schedule::new_round;
use crate::models::{PlayerIndex, RoomState, Roster, RoundId, RoundRecord, Score, Side};
use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;

/// Errors that can occur while applying a round command.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("No match with index {0} in the active round")]
    MatchNotFound(usize),
    #[error("No player with index {0}")]
    PlayerNotFound(PlayerIndex),
    #[error("No completed round with id {0}")]
    RoundNotFound(RoundId),
    /// Reopening a round would discard scores already entered.
    #[error("The active round has unsaved scores")]
    UnsavedScores,
}

/// A user action on the room.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    SetScore {
        match_index: usize,
        side: Side,
        score: Score,
    },
    SetFault {
        player: PlayerIndex,
        count: u32,
    },
    FinishRound,
    /// Move a completed round back into the active slot. `force` discards
    /// scores already entered in the active round.
    EditRound {
        id: RoundId,
        force: bool,
    },
    ResetRound,
    FillRandom,
}

/// What a command did. Every successful command changes the room.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Updated,
    Finished(RoundRecord),
    Reopened(RoundId),
}

/// Apply one command to the room state.
pub fn apply<R: Rng>(
    state: &mut RoomState,
    roster: &Roster,
    command: Command,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Outcome, SessionError> {
    match command {
        Command::SetScore {
            match_index,
            side,
            score,
        } => set_score(state, match_index, side, score).map(|()| Outcome::Updated),
        Command::SetFault { player, count } => {
            set_fault(state, player, count).map(|()| Outcome::Updated)
        }
        Command::FinishRound => Ok(Outcome::Finished(finish_round(state, roster, now))),
        Command::EditRound { id, force } => {
            edit_round(state, id, force).map(|()| Outcome::Reopened(id))
        }
        Command::ResetRound => {
            reset_round(state);
            Ok(Outcome::Updated)
        }
        Command::FillRandom => {
            fill_random(state, rng);
            Ok(Outcome::Updated)
        }
    }
}

/// Set one side's score for a match of the active round.
pub fn set_score(
    state: &mut RoomState,
    match_index: usize,
    side: Side,
    score: Score,
) -> Result<(), SessionError> {
    let m = state
        .current_round
        .matches
        .get_mut(match_index)
        .ok_or(SessionError::MatchNotFound(match_index))?;
    m.set_score(side, score);
    Ok(())
}

/// Set a player's fault count for the active round.
pub fn set_fault(state: &mut RoomState, player: PlayerIndex, count: u32) -> Result<(), SessionError> {
    let slot = state
        .current_round
        .faults
        .get_mut(player)
        .ok_or(SessionError::PlayerNotFound(player))?;
    *slot = count;
    Ok(())
}

/// Archive the active round into history and start a fresh one.
///
/// A reopened round keeps its id and date, so it sorts back into its
/// original place. The loser snapshot is taken now, with faults as the last
/// tie-break. Returns the stored record.
pub fn finish_round(state: &mut RoomState, roster: &Roster, now: DateTime<Utc>) -> RoundRecord {
    let round = std::mem::take(&mut state.current_round);
    let loser = round_loser(&round.matches, Some(&round.faults));
    let id = match round.id {
        Some(id) => id,
        None => next_round_id(state, now),
    };
    let record = RoundRecord {
        id,
        date: round.date.unwrap_or(now),
        matches: round.matches,
        faults: round.faults,
        loser_index: loser,
        loser_name: roster.loser_name(loser),
    };
    info!("Round {} finished, loser: {}", record.id, record.loser_name);

    state.history.push(record.clone());
    state.sort_history();
    record
}

/// Generation-time id, bumped past any id already in history.
fn next_round_id(state: &RoomState, now: DateTime<Utc>) -> RoundId {
    let mut id = now.timestamp_millis();
    while state.history.iter().any(|r| r.id.0 == id) {
        id += 1;
    }
    RoundId(id)
}

/// Take a completed round out of history and make it the active round.
/// Refuses when the active round already has scores, unless `force`.
pub fn edit_round(state: &mut RoomState, id: RoundId, force: bool) -> Result<(), SessionError> {
    let index = state
        .history
        .iter()
        .position(|r| r.id == id)
        .ok_or(SessionError::RoundNotFound(id))?;
    if state.current_round.is_dirty() && !force {
        return Err(SessionError::UnsavedScores);
    }
    let record = state.history.remove(index);
    state.current_round = record.reopen();
    debug!("Round {} reopened for editing", id);
    Ok(())
}

/// Replace the active round with an unplayed one.
pub fn reset_round(state: &mut RoomState) {
    state.current_round = new_round();
}

/// Fill the active round with plausible results: each match won 6 or 7 to
/// a lower score, faults 0 to 3 per player.
pub fn fill_random<R: Rng>(state: &mut RoomState, rng: &mut R) {
    for m in &mut state.current_round.matches {
        let winner_score: Score = if rng.gen_bool(0.5) { 6 } else { 7 };
        let loser_score: Score = rng.gen_range(0..winner_score - 1);
        if rng.gen_bool(0.5) {
            m.score1 = winner_score;
            m.score2 = loser_score;
        } else {
            m.score1 = loser_score;
            m.score2 = winner_score;
        }
    }
    for f in &mut state.current_round.faults {
        *f = rng.gen_range(0..=3);
    }
    debug!("Filled active round with random scores");
}
